//! Elemental lookup tables: effectiveness chart, terrain bonus, status mapping.
//! Pure data with no behavior beyond lookups.

use crate::types::{Element, StatusEffect, TerrainType};

pub const TERRAIN_MULTIPLIER: f64 = 1.2;

/// Rows are the attacking element, columns the defending element, both in
/// [`Element::ALL`] order.
const CHART: [[f64; 7]; 7] = [
    // physical fire water earth air shadow light
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.2, 1.2], // physical
    [1.0, 0.8, 0.7, 1.3, 1.0, 1.0, 1.0], // fire
    [1.0, 1.3, 0.8, 0.7, 1.0, 1.0, 1.0], // water
    [1.0, 0.7, 1.3, 0.8, 0.7, 1.0, 1.0], // earth
    [1.0, 1.0, 1.0, 1.3, 0.8, 1.0, 1.0], // air
    [0.7, 1.0, 1.0, 1.0, 1.0, 0.8, 0.7], // shadow
    [0.7, 1.0, 1.0, 1.0, 1.0, 1.3, 0.8], // light
];

pub fn effectiveness(attacker: Element, defender: Element) -> f64 {
    CHART[attacker.index()][defender.index()]
}

/// The chart row for `attacker`, paired with each defending element.
pub fn chart_row(attacker: Element) -> impl Iterator<Item = (Element, f64)> {
    Element::ALL.into_iter().map(move |defender| (defender, effectiveness(attacker, defender)))
}

/// Element that gains the terrain multiplier when attacking on `terrain`.
/// This table also drives the +1 player affinity granted at combat start.
pub fn terrain_element(terrain: TerrainType) -> Element {
    match terrain {
        TerrainType::Forest => Element::Earth,
        TerrainType::Mountain => Element::Air,
        TerrainType::Ruins => Element::Shadow,
        TerrainType::Clearing => Element::Light,
        TerrainType::Valley => Element::Water,
        TerrainType::Cave => Element::Fire,
    }
}

pub fn terrain_multiplier(terrain: Option<TerrainType>, element: Element) -> f64 {
    match terrain {
        Some(t) if terrain_element(t) == element => TERRAIN_MULTIPLIER,
        _ => 1.0,
    }
}

pub fn status_for(element: Element) -> StatusEffect {
    match element {
        Element::Physical => StatusEffect::Bleed,
        Element::Fire => StatusEffect::Burn,
        Element::Water => StatusEffect::Chill,
        Element::Earth => StatusEffect::Stun,
        Element::Air => StatusEffect::Confusion,
        Element::Shadow => StatusEffect::Blind,
        Element::Light => StatusEffect::Weaken,
    }
}

pub fn source_element(effect: StatusEffect) -> Element {
    match effect {
        StatusEffect::Bleed => Element::Physical,
        StatusEffect::Burn => Element::Fire,
        StatusEffect::Chill => Element::Water,
        StatusEffect::Stun => Element::Earth,
        StatusEffect::Confusion => Element::Air,
        StatusEffect::Blind => Element::Shadow,
        StatusEffect::Weaken => Element::Light,
    }
}

/// Advertised base chance (percent) for an element's status effect.
pub fn base_status_chance(element: Element) -> i32 {
    match element {
        Element::Physical => 15,
        Element::Fire | Element::Water => 20,
        Element::Earth => 10,
        Element::Air | Element::Shadow | Element::Light => 15,
    }
}

pub(crate) fn attack_flavor(element: Element) -> &'static str {
    match element {
        Element::Physical => "strikes with raw power",
        Element::Fire => "unleashes a fiery blast",
        Element::Water => "sends a torrent of water",
        Element::Earth => "hurls rocky debris",
        Element::Air => "summons a cutting gust",
        Element::Shadow => "channels dark energy",
        Element::Light => "focuses radiant energy",
    }
}

pub(crate) fn status_flavor(effect: StatusEffect) -> &'static str {
    match effect {
        StatusEffect::Burn => "setting them ablaze",
        StatusEffect::Chill => "slowing their movements",
        StatusEffect::Stun => "momentarily stunning them",
        StatusEffect::Confusion => "disorienting them",
        StatusEffect::Bleed => "causing a bleeding wound",
        StatusEffect::Blind => "temporarily blinding them",
        StatusEffect::Weaken => "weakening their defenses",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_element_resists() {
        for element in Element::ALL.into_iter().filter(|e| *e != Element::Physical) {
            assert_eq!(effectiveness(element, element), 0.8, "{element:?}");
        }
        assert_eq!(effectiveness(Element::Physical, Element::Physical), 1.0);
    }

    #[test]
    fn physical_hits_shadow_and_light_harder() {
        for defender in Element::CLASSICAL {
            assert_eq!(effectiveness(Element::Physical, defender), 1.0);
        }
        assert_eq!(effectiveness(Element::Physical, Element::Shadow), 1.2);
        assert_eq!(effectiveness(Element::Physical, Element::Light), 1.2);
    }

    #[test]
    fn classical_cycle_matches_table() {
        assert_eq!(effectiveness(Element::Fire, Element::Earth), 1.3);
        assert_eq!(effectiveness(Element::Water, Element::Fire), 1.3);
        assert_eq!(effectiveness(Element::Earth, Element::Water), 1.3);
        assert_eq!(effectiveness(Element::Air, Element::Earth), 1.3);
        assert_eq!(effectiveness(Element::Light, Element::Shadow), 1.3);
        assert_eq!(effectiveness(Element::Shadow, Element::Light), 0.7);
        assert_eq!(effectiveness(Element::Earth, Element::Air), 0.7);
    }

    #[test]
    fn every_multiplier_is_in_known_set() {
        for attacker in Element::ALL {
            for (_, m) in chart_row(attacker) {
                assert!([0.7, 0.8, 1.0, 1.2, 1.3].contains(&m));
            }
        }
    }

    #[test]
    fn status_mapping_round_trips_through_source() {
        for element in Element::ALL {
            assert_eq!(source_element(status_for(element)), element);
        }
    }

    #[test]
    fn each_terrain_boosts_one_element() {
        for terrain in TerrainType::ALL {
            let boosted: Vec<Element> = Element::ALL
                .into_iter()
                .filter(|e| terrain_multiplier(Some(terrain), *e) > 1.0)
                .collect();
            assert_eq!(boosted, vec![terrain_element(terrain)]);
        }
        assert_eq!(terrain_multiplier(None, Element::Earth), 1.0);
    }
}
