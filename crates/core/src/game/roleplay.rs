//! Free-form roleplay and path selection.

use super::*;

impl Game {
    pub(super) fn handle_emote(&mut self, command: &Command) -> String {
        format!("* {} {}", self.player.name, command.rest())
    }

    pub(super) fn handle_say(&mut self, command: &Command) -> String {
        format!("{} says: \"{}\"", self.player.name, command.rest())
    }

    pub(super) fn handle_think(&mut self, command: &Command) -> String {
        format!("* {} ponders: {}", self.player.name, command.rest())
    }

    /// Anything the parser did not recognise is narrated back as an action.
    pub(super) fn handle_roleplay(&mut self, command: &Command) -> String {
        format!("You {}.", command.rest())
    }

    pub(super) fn handle_choose(&mut self, command: &Command) -> String {
        if let Some(path) = self.player.path {
            return format!("You have already chosen the path of the {}.", path.name());
        }
        let Some(path) = command.args.first().and_then(|w| PathType::parse(w)) else {
            return format!(
                "There is no path of {}. Choose warrior, mystic or stealth.",
                command.rest()
            );
        };

        self.player.path = Some(path);
        self.log.push(LogEvent::PathChosen { path });
        let flavor = match path {
            PathType::Warrior => "Strength floods your limbs; steel and sinew will carry you.",
            PathType::Mystic => "The elements hum at the edge of your senses, waiting to be called.",
            PathType::Stealth => "The shadows lean closer, eager to hide your approach.",
        };
        format!("You walk the path of the {}. {flavor}", path.name())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn roleplay_formats_use_player_name() {
        let mut game = open_field_game();
        assert_eq!(game.execute("emote stamps a hoof"), "* Centaur Prime stamps a hoof");
        assert_eq!(game.execute("say well met"), "Centaur Prime says: \"well met\"");
        assert_eq!(game.execute("think of home"), "* Centaur Prime ponders: of home");
        assert_eq!(game.execute("gallop in circles"), "You gallop in circles.");
    }

    #[test]
    fn path_can_be_chosen_once() {
        let mut game = open_field_game();
        assert!(game.execute("choose druid").starts_with("There is no path of druid."));
        assert!(game.execute("choose mystic").starts_with("You walk the path of the mystic."));
        assert_eq!(game.player().path, Some(PathType::Mystic));
        assert_eq!(
            game.execute("choose warrior"),
            "You have already chosen the path of the mystic."
        );
        assert_eq!(game.log(), &[LogEvent::PathChosen { path: PathType::Mystic }]);
    }
}
