//! School registry.
//!
//! Static demo data: four Mandaue City schools sharing the same three-zone,
//! three-exit layout. The layout description is free text shown to users
//! and passed through to the route-finder form; the resolver does not
//! interpret it.

use serde::Serialize;

use crate::error::{AppError, AppResult};

/// A monitored school.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct School {
    pub id: &'static str,
    pub name: &'static str,
    pub map_url: &'static str,
    pub map_layout_description: &'static str,
}

const SCHOOLS: [School; 4] = [
    School {
        id: "cmc-elem",
        name: "Cesar M. Cabahug Elementary School",
        map_url: "/school-map.svg",
        map_layout_description: "The school has 3 zones (A, B, C) and 3 exits (1, 2, 3).\n\
            - Zone A is a large rectangular area on the west side.\n\
            - Zone B is a smaller rectangular area on the northeast.\n\
            - Zone C is a smaller rectangular area on the southeast.\n\
            - Exit 1 is on the far west wall, in the middle of Zone A.\n\
            - Exit 2 is on the far east wall, between Zone B and Zone C.\n\
            - Exit 3 is on the north wall, in Zone B.\n\
            - A hallway connects all zones. Access between zones is direct.",
    },
    School {
        id: "mcnnhs",
        name: "Mandaue City Comprehensive National High School",
        map_url: "/school-map.svg",
        map_layout_description: "The school has 3 zones (A, B, C) and 3 exits (1, 2, 3).\n\
            - Zone A is on the west.\n\
            - Zone B is on the northeast.\n\
            - Zone C is on the southeast.\n\
            - Exit 1 is on the west wall.\n\
            - Exit 2 is on the east wall.\n\
            - Exit 3 is on the north wall.\n\
            - A central corridor connects all zones.",
    },
    School {
        id: "umapad-elem",
        name: "Umapad Elementary School",
        map_url: "/school-map.svg",
        map_layout_description: "The school has 3 zones (A, B, C) and 3 exits (1, 2, 3).\n\
            - Zone A covers the western building.\n\
            - Zone B covers the northeastern building.\n\
            - Zone C covers the southeastern building.\n\
            - Exit 1 is west of Zone A.\n\
            - Exit 2 is east, between B and C.\n\
            - Exit 3 is north of Zone B.\n\
            - An open quad connects the zones.",
    },
    School {
        id: "paknaan-elem",
        name: "Paknaan Elementary School",
        map_url: "/school-map.svg",
        map_layout_description: "The school contains three main areas: Zone A, Zone B, and Zone C, \
            with three emergency exits.\n\
            - Zone A is the western-most section.\n\
            - Zone B is in the top-right (northeast).\n\
            - Zone C is in the bottom-right (southeast).\n\
            - Exit 1 is on the western edge of Zone A.\n\
            - Exit 2 is on the eastern edge, accessible from Zone B and C.\n\
            - Exit 3 is on the northern edge of Zone B.\n\
            - All zones are connected by covered walkways.",
    },
];

/// All registered schools.
pub fn list_schools() -> &'static [School] {
    &SCHOOLS
}

/// Look up a school by id.
pub fn get_school(id: &str) -> AppResult<&'static School> {
    SCHOOLS
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::SchoolNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_four_schools() {
        assert_eq!(list_schools().len(), 4);
    }

    #[test]
    fn lookup_by_id() {
        let school = get_school("umapad-elem").unwrap();
        assert_eq!(school.name, "Umapad Elementary School");
    }

    #[test]
    fn unknown_id_is_typed_error() {
        assert!(matches!(
            get_school("nope"),
            Err(AppError::SchoolNotFound(_))
        ));
    }

    #[test]
    fn layouts_mention_all_zones() {
        for school in list_schools() {
            for zone in ["Zone A", "Zone B", "Zone C"] {
                assert!(
                    school.map_layout_description.contains(zone),
                    "{} layout missing {zone}",
                    school.id
                );
            }
        }
    }
}
