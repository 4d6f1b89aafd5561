//! Dynamic list builder state
//!
//! The advanced editor lets the user append any number of predicate and
//! filter blocks. Each block gets an index from its list's counter; the
//! index only ever grows, so removing a block leaves a gap in the submitted
//! field names rather than renumbering the survivors.

// =============================================================================
// List Specs
// =============================================================================

/// Static description of one repeated-block list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSpec {
    /// Id of the element the blocks are appended to.
    pub container_id: &'static str,
    /// Id of the button that adds a block.
    pub add_button_id: &'static str,
    /// Human label, e.g. "Predicate".
    pub label: &'static str,
    /// Field-name prefix, e.g. "predicates".
    pub prefix: &'static str,
    pub name_placeholder: &'static str,
    pub name_help: &'static str,
    pub args_placeholder: &'static str,
    pub args_help: &'static str,
}

impl ListSpec {
    pub const PREDICATES: ListSpec = ListSpec {
        container_id: "predicates-container",
        add_button_id: "add-predicate",
        label: "Predicate",
        prefix: "predicates",
        name_placeholder: "e.g., Path, Method, Header",
        name_help: "Examples: Path, Method, Header, Query, Host, After, Before",
        args_placeholder: "e.g., _genkey_0=/api/users/**",
        args_help: "Format: key=value (one per line). For Path use: _genkey_0=/path/**",
    };

    pub const FILTERS: ListSpec = ListSpec {
        container_id: "filters-container",
        add_button_id: "add-filter",
        label: "Filter",
        prefix: "filters",
        name_placeholder: "e.g., StripPrefix, AddRequestHeader",
        name_help: "Examples: StripPrefix, AddRequestHeader, RewritePath, CircuitBreaker",
        args_placeholder: "e.g., _genkey_0=1",
        args_help: "Format: key=value (one per line). For StripPrefix use: _genkey_0=1",
    };

    /// Form field name for the `name` input of item `index`.
    pub fn name_field(&self, index: usize) -> String {
        format!("{}[{}].name", self.prefix, index)
    }

    /// Form field name for the `args` text area of item `index`.
    pub fn args_field(&self, index: usize) -> String {
        format!("{}[{}].args", self.prefix, index)
    }
}

// =============================================================================
// Item Blueprints
// =============================================================================

/// Everything needed to render one block, minus the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBlueprint {
    pub index: usize,
    /// 1-based number shown to the user.
    pub ordinal: usize,
    pub title: String,
    pub name_label: String,
    pub name_field: String,
    pub args_field: String,
    pub spec: ListSpec,
}

impl ItemBlueprint {
    pub const ARGS_LABEL: &'static str = "Arguments (key=value, one per line)";
    pub const REMOVE_TEXT: &'static str = "Remove";
}

// =============================================================================
// Builder
// =============================================================================

/// Counter for one list. Owned by whoever renders the list.
#[derive(Debug, Clone)]
pub struct ListBuilder {
    spec: ListSpec,
    next_index: usize,
}

impl ListBuilder {
    pub fn new(spec: ListSpec) -> Self {
        Self { spec, next_index: 0 }
    }

    pub fn spec(&self) -> &ListSpec {
        &self.spec
    }

    /// Number of items handed out so far. Never decreases.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Blueprint for the item that `next_item` would return, without
    /// consuming an index.
    pub fn peek(&self) -> ItemBlueprint {
        let index = self.next_index;
        ItemBlueprint {
            index,
            ordinal: index + 1,
            title: format!("{} {}", self.spec.label, index + 1),
            name_label: format!("{} Name", self.spec.label),
            name_field: self.spec.name_field(index),
            args_field: self.spec.args_field(index),
            spec: self.spec,
        }
    }

    /// Hand out the next item and advance the counter by one.
    pub fn next_item(&mut self) -> ItemBlueprint {
        let item = self.peek();
        self.next_index += 1;
        log::debug!("{} index advanced to {}", self.spec.prefix, self.next_index);
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_are_numbered_in_order() {
        let mut builder = ListBuilder::new(ListSpec::PREDICATES);
        let names: Vec<String> = (0..4).map(|_| builder.next_item().name_field).collect();

        assert_eq!(
            names,
            vec![
                "predicates[0].name",
                "predicates[1].name",
                "predicates[2].name",
                "predicates[3].name",
            ]
        );
        assert_eq!(builder.next_index(), 4);
    }

    #[test]
    fn test_blueprint_fields() {
        let mut builder = ListBuilder::new(ListSpec::FILTERS);
        builder.next_item();
        let item = builder.next_item();

        assert_eq!(item.index, 1);
        assert_eq!(item.ordinal, 2);
        assert_eq!(item.title, "Filter 2");
        assert_eq!(item.name_label, "Filter Name");
        assert_eq!(item.name_field, "filters[1].name");
        assert_eq!(item.args_field, "filters[1].args");
        assert_eq!(item.spec.args_placeholder, "e.g., _genkey_0=1");
    }

    #[test]
    fn test_peek_does_not_advance() {
        let builder = ListBuilder::new(ListSpec::PREDICATES);
        assert_eq!(builder.peek().index, 0);
        assert_eq!(builder.peek().index, 0);
        assert_eq!(builder.next_index(), 0);
    }

    #[test]
    fn test_lists_count_independently() {
        let mut predicates = ListBuilder::new(ListSpec::PREDICATES);
        let mut filters = ListBuilder::new(ListSpec::FILTERS);
        predicates.next_item();
        predicates.next_item();

        assert_eq!(filters.next_item().name_field, "filters[0].name");
        assert_eq!(predicates.next_index(), 2);
    }
}
