//! Family Tree Layout
//!
//! The tree is hand-authored: a fixed table of people (by full name) with
//! canvas positions, plus a fixed table of parent -> child edges. Assembly
//! only resolves those names against the fetched directory.
//!
//! Names are the join key. A name that matches nobody still gets its card
//! (inert, no photo) so the layout never shifts, but any edge touching it is
//! dropped. Duplicate names resolve to the first person in directory order.

use std::collections::HashMap;

use crate::models::{Person, USER_PLACEHOLDER};

/// Card size on the canvas, used for edge anchors and bounds
pub const NODE_WIDTH: f64 = 112.0;
pub const NODE_HEIGHT: f64 = 132.0;

/// (surname, name, middlename)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameKey {
    pub surname: &'static str,
    pub name: &'static str,
    pub middlename: &'static str,
}

impl NameKey {
    const fn new(surname: &'static str, name: &'static str, middlename: &'static str) -> Self {
        Self { surname, name, middlename }
    }

    fn matches(&self, person: &Person) -> bool {
        person.matches_name(self.surname, self.name, self.middlename)
    }
}

const TATIANA: NameKey = NameKey::new("Задворнова", "Татьяна", "Алексеевна");
const VLADIMIR: NameKey = NameKey::new("Задворнов", "Владимир", "Алексеевич");
const ELENA: NameKey = NameKey::new("Задворнова", "Елена", "Викторовна");
const YURI: NameKey = NameKey::new("Лобов", "Юрий", "Александрович");
const NADEZHDA: NameKey = NameKey::new("Лобова", "Надежда", "Васильевна");
const LYUDMILA: NameKey = NameKey::new("Стародубцева", "Людмила", "Васильевна");

const EKATERINA: NameKey = NameKey::new("Задворнова", "Екатерина", "Евгеньевна");
const ANDREY: NameKey = NameKey::new("Задворнов", "Андрей", "Владимирович");
const MARIA: NameKey = NameKey::new("Задворнова", "Мария", "Юрьевна");
const DMITRY: NameKey = NameKey::new("Задворнов", "Дмитрий", "Владимирович");
const KSENIA: NameKey = NameKey::new("Бухтина-Задворнова", "Ксения", "Александровна");

const SAVELY: NameKey = NameKey::new("Задворнов", "Савелий", "Андреевич");
const DARIA: NameKey = NameKey::new("Задворнова", "Дарья", "Андреевна");
const VIKTOR: NameKey = NameKey::new("Задворнов", "Виктор", "Дмитриевич");
const NINA: NameKey = NameKey::new("Задворнова", "Нина", "Дмитриевна");
const ARINA: NameKey = NameKey::new("Задворнова", "Арина", "Дмитриевна");
const TAMARA: NameKey = NameKey::new("Задворнова", "Тамара", "Дмитриевна");

/// Cards in render order with their (x, y) positions, one row per generation
pub const LAYOUT: &[(NameKey, f64, f64)] = &[
    (TATIANA, -180.0, 0.0),
    (VLADIMIR, 0.0, 0.0),
    (ELENA, 180.0, 0.0),
    (YURI, 360.0, 0.0),
    (NADEZHDA, 540.0, 0.0),
    (LYUDMILA, 720.0, 0.0),
    (EKATERINA, -140.0, 200.0),
    (ANDREY, 40.0, 200.0),
    (MARIA, 220.0, 200.0),
    (DMITRY, 400.0, 200.0),
    (KSENIA, 580.0, 200.0),
    (SAVELY, -40.0, 400.0),
    (DARIA, 140.0, 400.0),
    (VIKTOR, 320.0, 400.0),
    (NINA, 500.0, 400.0),
    (ARINA, 680.0, 400.0),
    (TAMARA, 860.0, 400.0),
];

/// Parent -> child links; edge ids are `e1`.. in this order
pub const EDGES: &[(NameKey, NameKey)] = &[
    (VLADIMIR, ANDREY),
    (ELENA, ANDREY),
    (VLADIMIR, DMITRY),
    (ELENA, DMITRY),
    (ANDREY, SAVELY),
    (MARIA, SAVELY),
    (ANDREY, DARIA),
    (MARIA, DARIA),
    (DMITRY, VIKTOR),
    (KSENIA, VIKTOR),
    (DMITRY, NINA),
    (KSENIA, NINA),
    (DMITRY, ARINA),
    (KSENIA, ARINA),
    (DMITRY, TAMARA),
    (KSENIA, TAMARA),
    (YURI, MARIA),
    (NADEZHDA, MARIA),
    (TATIANA, EKATERINA),
];

/// One card on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// Matched person; `None` renders an inert placeholder
    pub person_id: Option<String>,
    pub label: String,
    pub photo: String,
    pub x: f64,
    pub y: f64,
}

/// Parent -> child line between two matched cards
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Edge as a line from the parent's bottom edge to the child's top edge
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSegment {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FamilyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl FamilyGraph {
    pub fn node(&self, person_id: &str) -> Option<&GraphNode> {
        self.nodes
            .iter()
            .find(|n| n.person_id.as_deref() == Some(person_id))
    }

    /// Layout names that matched nobody
    pub fn unmatched(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.person_id.is_none())
    }

    pub fn segments(&self) -> Vec<EdgeSegment> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let parent = self.node(&edge.source)?;
                let child = self.node(&edge.target)?;
                Some(EdgeSegment {
                    id: edge.id.clone(),
                    x1: parent.x + NODE_WIDTH / 2.0,
                    y1: parent.y + NODE_HEIGHT,
                    x2: child.x + NODE_WIDTH / 2.0,
                    y2: child.y,
                })
            })
            .collect()
    }

    /// (min_x, min_y, width, height) covering every card, for an SVG viewBox
    pub fn bounds(&self, padding: f64) -> (f64, f64, f64, f64) {
        if self.nodes.is_empty() {
            return (0.0, 0.0, 0.0, 0.0);
        }
        let min_x = self.nodes.iter().map(|n| n.x).fold(f64::INFINITY, f64::min);
        let min_y = self.nodes.iter().map(|n| n.y).fold(f64::INFINITY, f64::min);
        let max_x = self.nodes.iter().map(|n| n.x).fold(f64::NEG_INFINITY, f64::max) + NODE_WIDTH;
        let max_y = self.nodes.iter().map(|n| n.y).fold(f64::NEG_INFINITY, f64::max) + NODE_HEIGHT;
        (
            min_x - padding,
            min_y - padding,
            max_x - min_x + padding * 2.0,
            max_y - min_y + padding * 2.0,
        )
    }
}

/// First person in `people` carrying this name
fn lookup<'a>(people: &'a [Person], key: &NameKey) -> Option<&'a Person> {
    people.iter().find(|p| key.matches(p))
}

/// Resolve the fixed layout against the fetched directory
pub fn assemble(people: &[Person]) -> FamilyGraph {
    let resolved: HashMap<NameKey, &Person> = LAYOUT
        .iter()
        .filter_map(|(key, _, _)| lookup(people, key).map(|p| (*key, p)))
        .collect();

    let nodes = LAYOUT
        .iter()
        .map(|(key, x, y)| {
            let person = resolved.get(key);
            if person.is_none() {
                log::warn!(
                    "no person named {} {} {}, rendering placeholder",
                    key.surname, key.name, key.middlename
                );
            }
            GraphNode {
                person_id: person.map(|p| p.id.clone()),
                label: key.name.to_string(),
                photo: person
                    .map(|p| p.avatar_or_placeholder())
                    .unwrap_or(USER_PLACEHOLDER)
                    .to_string(),
                x: *x,
                y: *y,
            }
        })
        .collect();

    let edges = EDGES
        .iter()
        .enumerate()
        .filter_map(|(idx, (parent, child))| {
            let source = resolved.get(parent)?;
            let target = resolved.get(child)?;
            Some(GraphEdge {
                id: format!("e{}", idx + 1),
                source: source.id.clone(),
                target: target.id.clone(),
            })
        })
        .collect();

    FamilyGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::make_person;

    fn full_directory() -> Vec<Person> {
        LAYOUT
            .iter()
            .enumerate()
            .map(|(idx, (key, _, _))| make_person(&format!("p{}", idx), key.surname, key.name, key.middlename))
            .collect()
    }

    #[test]
    fn test_full_directory_resolves_everything() {
        let graph = assemble(&full_directory());
        assert_eq!(graph.nodes.len(), 17);
        assert_eq!(graph.edges.len(), 19);
        assert_eq!(graph.unmatched().count(), 0);

        // e1: Владимир -> Андрей
        assert_eq!(graph.edges[0].id, "e1");
        assert_eq!(graph.edges[0].source, "p1");
        assert_eq!(graph.edges[0].target, "p7");
        // e19: Татьяна -> Екатерина
        assert_eq!(graph.edges[18].source, "p0");
        assert_eq!(graph.edges[18].target, "p6");
    }

    #[test]
    fn test_node_positions_follow_layout() {
        let graph = assemble(&full_directory());
        let andrey = graph.node("p7").unwrap();
        assert_eq!(andrey.label, "Андрей");
        assert_eq!((andrey.x, andrey.y), (40.0, 200.0));
        assert_eq!(andrey.photo, USER_PLACEHOLDER);
    }

    #[test]
    fn test_missing_person_keeps_card_and_drops_edges() {
        // Drop Дмитрий (index 9) - he has 1 parent pair and 4 children
        let people: Vec<Person> = full_directory()
            .into_iter()
            .filter(|p| p.id != "p9")
            .collect();
        let graph = assemble(&people);

        assert_eq!(graph.nodes.len(), 17);
        let placeholders: Vec<_> = graph.unmatched().collect();
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].label, "Дмитрий");
        assert_eq!((placeholders[0].x, placeholders[0].y), (400.0, 200.0));

        assert_eq!(graph.edges.len(), 19 - 6);
        assert!(graph.edges.iter().all(|e| e.source != "p9" && e.target != "p9"));
        // Ids keep their table position
        assert!(graph.edges.iter().any(|e| e.id == "e10"));
        assert!(!graph.edges.iter().any(|e| e.id == "e9"));
    }

    #[test]
    fn test_name_mismatch_is_not_fuzzy() {
        let mut people = full_directory();
        people[7].name = "Андрэй".to_string();
        let graph = assemble(&people);
        assert!(graph.node("p7").is_none());
        assert_eq!(graph.unmatched().count(), 1);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let mut people = full_directory();
        people.push(make_person("dup", "Задворнов", "Андрей", "Владимирович"));
        let graph = assemble(&people);
        assert!(graph.node("p7").is_some());
        assert!(graph.node("dup").is_none());
    }

    #[test]
    fn test_avatar_used_as_photo() {
        let mut people = full_directory();
        people[0].images = vec!["https://img/tatiana.jpg".to_string()];
        let graph = assemble(&people);
        assert_eq!(graph.nodes[0].photo, "https://img/tatiana.jpg");
    }

    #[test]
    fn test_empty_directory_renders_placeholders_only() {
        let graph = assemble(&[]);
        assert_eq!(graph.nodes.len(), 17);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_segments_join_card_edges() {
        let graph = assemble(&full_directory());
        let segments = graph.segments();
        assert_eq!(segments.len(), 19);
        // e1: Владимир (0, 0) -> Андрей (40, 200)
        assert_eq!(segments[0].id, "e1");
        assert_eq!((segments[0].x1, segments[0].y1), (NODE_WIDTH / 2.0, NODE_HEIGHT));
        assert_eq!((segments[0].x2, segments[0].y2), (40.0 + NODE_WIDTH / 2.0, 200.0));
    }

    #[test]
    fn test_bounds_cover_all_cards() {
        let graph = assemble(&[]);
        let (x, y, w, h) = graph.bounds(20.0);
        assert_eq!((x, y), (-200.0, -20.0));
        assert_eq!(w, 860.0 + NODE_WIDTH + 180.0 + 40.0);
        assert_eq!(h, 400.0 + NODE_HEIGHT + 40.0);
    }
}
