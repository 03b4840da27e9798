use crate::error::{ConfigurationError, Result};
use crate::model::TypeDescriptor;

/// All types stored in one physical table.
///
/// A group is never empty. Member order is significant: wherever members
/// disagree, the first member in group order wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGroup {
    name: String,
    descriptors: Vec<TypeDescriptor>,
}

impl TableGroup {
    /// Creates a group, rejecting an empty member list.
    pub fn new(name: impl Into<String>, descriptors: Vec<TypeDescriptor>) -> Result<Self> {
        let name = name.into();
        if descriptors.is_empty() {
            return Err(ConfigurationError::EmptyGroup { table: name });
        }
        Ok(Self::from_parts(name, descriptors))
    }

    /// Callers guarantee `descriptors` is non-empty.
    pub(crate) fn from_parts(name: String, descriptors: Vec<TypeDescriptor>) -> Self {
        debug_assert!(!descriptors.is_empty());
        Self { name, descriptors }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    /// Member type names in group order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.type_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_group_is_rejected() {
        let result = TableGroup::new("Orders", Vec::new());
        assert_eq!(
            result,
            Err(ConfigurationError::EmptyGroup {
                table: "Orders".to_string()
            })
        );
    }

    #[test]
    fn test_group_keeps_member_order() {
        let group = TableGroup::new(
            "Orders",
            vec![TypeDescriptor::new("Order"), TypeDescriptor::new("OrderLine")],
        )
        .unwrap();

        assert_eq!(group.name(), "Orders");
        let names: Vec<&str> = group.type_names().collect();
        assert_eq!(names, vec!["Order", "OrderLine"]);
    }
}
