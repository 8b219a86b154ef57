//! Ordered skill categories

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Skills under one category label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// Mapping of category to skills that keeps the declared order.
///
/// In JSON this is an object (`{"Languages": ["Rust", "Go"], ...}`); the
/// order of its keys is the order lines are printed in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillGroups(Vec<SkillGroup>);

impl SkillGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category, or replace the skills of an existing one in place
    pub fn insert(&mut self, category: impl Into<String>, skills: Vec<String>) {
        let category = category.into();
        match self.0.iter_mut().find(|group| group.category == category) {
            Some(group) => group.skills = skills,
            None => self.0.push(SkillGroup { category, skills }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkillGroup> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<C: Into<String>> FromIterator<(C, Vec<String>)> for SkillGroups {
    fn from_iter<I: IntoIterator<Item = (C, Vec<String>)>>(iter: I) -> Self {
        let mut groups = SkillGroups::new();
        for (category, skills) in iter {
            groups.insert(category, skills);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a SkillGroups {
    type Item = &'a SkillGroup;
    type IntoIter = std::slice::Iter<'a, SkillGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for SkillGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for group in &self.0 {
            map.serialize_entry(&group.category, &group.skills)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillGroups {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = SkillGroups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill category to a list of skills")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut groups = SkillGroups::new();
                while let Some((category, skills)) = access.next_entry::<String, Vec<String>>()? {
                    groups.insert(category, skills);
                }
                Ok(groups)
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_order_is_kept() {
        let groups: SkillGroups = serde_json::from_str(
            r#"{"Tools": ["Git"], "Languages": ["Rust", "Go"], "Databases": []}"#,
        )
        .unwrap();
        let categories: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["Tools", "Languages", "Databases"]);
        assert_eq!(groups.iter().nth(1).unwrap().skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_serialize_as_map() {
        let groups: SkillGroups = vec![("Frontend", vec!["React".to_string()])]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_string(&groups).unwrap(),
            r#"{"Frontend":["React"]}"#
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut groups = SkillGroups::new();
        groups.insert("A", vec!["1".into()]);
        groups.insert("B", vec![]);
        groups.insert("A", vec!["2".into()]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.iter().next().unwrap().skills, vec!["2"]);
    }
}
