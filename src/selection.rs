//! Relative Selection
//!
//! People picked on the tree, and the memories shared by all of them.

use crate::models::{Memory, Person};

/// Ordered set of chosen person ids (pick order is kept for display)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChosenSet {
    ids: Vec<String>,
}

impl ChosenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove `person_id`; returns whether it is now chosen
    pub fn toggle(&mut self, person_id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| id == person_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(person_id.to_string());
            true
        }
    }

    pub fn contains(&self, person_id: &str) -> bool {
        self.ids.iter().any(|id| id == person_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Chosen people in pick order; ids missing from `people` are skipped
    pub fn resolve<'a>(&self, people: &'a [Person]) -> Vec<&'a Person> {
        self.ids
            .iter()
            .filter_map(|id| people.iter().find(|p| &p.id == id))
            .collect()
    }
}

/// Memories whose relatives include every chosen person, in input order.
///
/// An empty selection matches everything.
pub fn filter_memories(memories: &[Memory], chosen: &ChosenSet) -> Vec<Memory> {
    memories
        .iter()
        .filter(|memory| chosen.ids().iter().all(|id| memory.has_relative(id)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{make_memory, make_person};

    fn ids(memories: &[Memory]) -> Vec<&str> {
        memories.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut chosen = ChosenSet::new();
        assert!(chosen.toggle("a"));
        assert!(chosen.toggle("b"));
        assert_eq!(chosen.ids(), ["a", "b"]);
        assert!(!chosen.toggle("a"));
        assert_eq!(chosen.ids(), ["b"]);
        assert!(!chosen.contains("a"));
    }

    #[test]
    fn test_superset_rule() {
        let memories = vec![make_memory("m1", &["A", "B"])];

        let mut chosen = ChosenSet::new();
        chosen.toggle("A");
        assert_eq!(ids(&filter_memories(&memories, &chosen)), ["m1"]);

        chosen.toggle("C");
        assert!(filter_memories(&memories, &chosen).is_empty());
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let memories = vec![
            make_memory("m1", &["A", "B"]),
            make_memory("m2", &["A"]),
            make_memory("m3", &["B", "C"]),
        ];
        let mut chosen = ChosenSet::new();
        chosen.toggle("A");
        let before_set = chosen.clone();
        let before_list = filter_memories(&memories, &chosen);
        assert_eq!(ids(&before_list), ["m1", "m2"]);

        chosen.toggle("B");
        assert_eq!(ids(&filter_memories(&memories, &chosen)), ["m1"]);
        chosen.toggle("B");

        assert_eq!(chosen, before_set);
        assert_eq!(filter_memories(&memories, &chosen), before_list);
    }

    #[test]
    fn test_empty_selection_matches_all() {
        let memories = vec![make_memory("m1", &["A"]), make_memory("m2", &[])];
        assert_eq!(filter_memories(&memories, &ChosenSet::new()).len(), 2);
    }

    #[test]
    fn test_resolve_keeps_pick_order() {
        let people = vec![
            make_person("a", "S", "Анна", ""),
            make_person("b", "S", "Борис", ""),
        ];
        let mut chosen = ChosenSet::new();
        chosen.toggle("b");
        chosen.toggle("ghost");
        chosen.toggle("a");
        let names: Vec<_> = chosen.resolve(&people).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Борис", "Анна"]);
    }
}
