//! Command-line tokenizing into typed commands.
//!
//! Parsing walks an ordered rule table and stops at the first pattern that
//! matches the normalized line. More specific phrasings ("look at X",
//! "gather X from Y") sit ahead of their bare forms. Anything no rule claims
//! becomes a roleplay command. Execution lives in `game`.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::error;

use crate::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandType {
    Move,
    Look,
    Status,
    Inventory,
    Map,
    Help,
    Time,
    Take,
    Drop,
    Gather,
    Attack,
    Defend,
    Dodge,
    Special,
    Flee,
    Meditate,
    Choose,
    Emote,
    Say,
    Think,
    Roleplay,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    pub kind: CommandType,
    pub args: Vec<String>,
    /// Non-empty when the line could not be turned into a usable command.
    pub error_message: String,
}

impl Command {
    pub fn new(kind: CommandType, args: Vec<String>) -> Self {
        Self { kind, args, error_message: String::new() }
    }

    fn invalid(kind: CommandType, message: impl Into<String>) -> Self {
        Self { kind, args: Vec::new(), error_message: message.into() }
    }

    pub fn is_valid(&self) -> bool {
        self.error_message.is_empty()
    }

    /// Arguments joined back into a phrase.
    pub fn rest(&self) -> String {
        self.args.join(" ")
    }
}

type Builder = fn(&Captures<'_>) -> Command;

struct Rule {
    pattern: Regex,
    build: Builder,
}

fn group(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().trim().to_string()).filter(|s| !s.is_empty())
}

fn words(caps: &Captures<'_>, name: &str) -> Vec<String> {
    group(caps, name)
        .map(|s| s.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

fn phrase(kind: CommandType) -> impl Fn(&Captures<'_>) -> Command {
    move |caps| Command::new(kind, group(caps, "rest").into_iter().collect())
}

fn move_to(word: &str) -> Command {
    match Direction::parse(word) {
        Some(dir) => Command::new(CommandType::Move, vec![dir.name().to_string()]),
        None => Command::invalid(CommandType::Move, format!("Unknown direction: {word}")),
    }
}

const RULE_TABLE: &[(&str, Builder)] = &[
    (r"^(?:look at|look|examine|inspect) (?P<rest>.+)$", |c| phrase(CommandType::Look)(c)),
    (r"^(?:look|l|examine)$", |_| Command::new(CommandType::Look, Vec::new())),
    (r"^(?:go|move|walk|travel|head) (?P<rest>.+)$", |c| {
        move_to(&group(c, "rest").unwrap_or_default())
    }),
    (r"^(?P<dir>north|south|east|west|n|s|e|w)$", |c| move_to(&group(c, "dir").unwrap_or_default())),
    (r"^(?:gather|collect|harvest|forage) (?P<what>.+?) from (?P<src>.+)$", |c| {
        let args = [group(c, "what"), group(c, "src")].into_iter().flatten().collect();
        Command::new(CommandType::Gather, args)
    }),
    (r"^(?:gather|collect|harvest|forage)(?: (?P<rest>.+))?$", |c| {
        phrase(CommandType::Gather)(c)
    }),
    (r"^(?:pick up|pickup|pick|take|get|grab)(?: (?P<rest>.+))?$", |c| {
        match group(c, "rest") {
            Some(item) => Command::new(CommandType::Take, vec![item]),
            None => Command::invalid(CommandType::Take, "Take what?"),
        }
    }),
    (r"^(?:drop|put down|put|place|discard)(?: (?P<rest>.+))?$", |c| {
        match group(c, "rest") {
            Some(item) => Command::new(CommandType::Drop, vec![item]),
            None => Command::invalid(CommandType::Drop, "Drop what?"),
        }
    }),
    (r"^(?:status|stats|stat)$", |_| Command::new(CommandType::Status, Vec::new())),
    (r"^(?:inventory|inv|i)$", |_| Command::new(CommandType::Inventory, Vec::new())),
    (r"^(?:map|m)$", |_| Command::new(CommandType::Map, Vec::new())),
    (r"^(?:help|h|\?)$", |_| Command::new(CommandType::Help, Vec::new())),
    (r"^(?:time|clock)$", |_| Command::new(CommandType::Time, Vec::new())),
    (r"^(?:attack|strike|hit|slash|fight)(?: (?P<rest>.+))?$", |c| {
        Command::new(CommandType::Attack, words(c, "rest"))
    }),
    (r"^(?:defend|block|guard|shield)(?: (?P<rest>.+))?$", |c| {
        Command::new(CommandType::Defend, words(c, "rest"))
    }),
    (r"^(?:dodge|evade|avoid|roll)(?: (?P<rest>.+))?$", |c| {
        Command::new(CommandType::Dodge, words(c, "rest"))
    }),
    (r"^(?:special|skill|ability|power)(?: (?P<rest>.+))?$", |c| {
        Command::new(CommandType::Special, words(c, "rest"))
    }),
    (r"^(?:flee|retreat|run)$", |_| Command::new(CommandType::Flee, Vec::new())),
    (r"^(?:meditate|rest|recover)$", |_| Command::new(CommandType::Meditate, Vec::new())),
    (r"^choose(?: (?P<rest>.+))?$", |c| match group(c, "rest") {
        Some(path) => Command::new(CommandType::Choose, vec![path]),
        None => Command::invalid(CommandType::Choose, "Choose which path: warrior, mystic or stealth?"),
    }),
    (r"^(?:emote|me|action|act) (?P<rest>.+)$", |c| phrase(CommandType::Emote)(c)),
    (r"^(?:say|speak|tell) (?P<rest>.+)$", |c| phrase(CommandType::Say)(c)),
    (r"^(?:think|ponder|contemplate) (?P<rest>.+)$", |c| phrase(CommandType::Think)(c)),
];

static RULES: LazyLock<Result<Vec<Rule>, regex::Error>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|(src, build)| Ok(Rule { pattern: Regex::new(src)?, build: *build }))
        .collect()
});

/// Lowercases, trims and collapses internal whitespace.
pub fn normalize(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

pub fn parse(line: &str) -> Command {
    let line = normalize(line);
    if line.is_empty() {
        return Command::invalid(CommandType::Roleplay, "Please enter a command.");
    }

    let rules = match RULES.as_ref() {
        Ok(rules) => rules,
        Err(err) => {
            error!(%err, "command rule table failed to compile");
            return Command::invalid(CommandType::Roleplay, "Something went wrong.");
        }
    };

    rules
        .iter()
        .find_map(|rule| rule.pattern.captures(&line).map(|caps| (rule.build)(&caps)))
        .unwrap_or_else(|| Command::new(CommandType::Roleplay, vec![line]))
}
