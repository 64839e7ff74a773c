//! Ownership model tests

use data_catalog_sdk::models::catalog::{
    OWNERSHIP_RELATION_TYPE, TABLE_TYPE_NAME, USER_TYPE_NAME,
};
use data_catalog_sdk::models::owner::{
    owner_key, OWNER_OF_OBJECT_RELATION_TYPE, OWNER_RELATION_TYPE, TABLE_NODE_LABEL,
    USER_NODE_EMAIL, USER_NODE_LABEL,
};
use data_catalog_sdk::{
    CatalogOperation, CatalogSerializable, GraphSerializable, RelationalRecord,
    RelationalSerializable, TableOwner,
};

fn sample_owner(owners: &str) -> TableOwner {
    TableOwner::from_csv("hive", "default", "events", owners, "gold")
}

mod normalization_tests {
    use super::*;

    #[test]
    fn test_comma_string_is_split_and_trimmed() {
        let owner = sample_owner("a, b ,c");
        assert_eq!(owner.owners(), &["a", "b", "c"]);
    }

    #[test]
    fn test_explicit_list_is_trimmed_in_order() {
        let owner = TableOwner::new(
            "hive",
            "default",
            "events",
            vec![" x@y.com ".to_string(), "z@y.com".to_string()],
            "gold",
        );
        assert_eq!(owner.owners(), &["x@y.com", "z@y.com"]);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let owner = sample_owner("a@b.com,a@b.com");
        assert_eq!(owner.owners(), &["a@b.com", "a@b.com"]);
    }
}

mod key_tests {
    use super::*;

    #[test]
    fn test_table_key_format() {
        let owner = sample_owner("a@b.com");
        assert_eq!(owner.table_key(), "hive://gold.default/events");
    }

    #[test]
    fn test_keys_differ_across_cluster_and_schema() {
        let a = TableOwner::from_csv("hive", "default", "events", "a@b.com", "gold");
        let b = TableOwner::from_csv("hive", "default", "events", "a@b.com", "silver");
        let c = TableOwner::from_csv("hive", "other", "events", "a@b.com", "gold");

        assert_ne!(a.table_key(), b.table_key());
        assert_ne!(a.table_key(), c.table_key());
        assert_ne!(b.table_key(), c.table_key());
    }

    #[test]
    fn test_owner_key_is_identical_across_sinks() {
        let mut owner = sample_owner("x@y.com");
        let key = owner_key("x@y.com");

        let node = owner.create_next_node().unwrap();
        let relation = owner.create_next_relation().unwrap();
        let entity = owner.create_next_entity().unwrap();
        let catalog_relation = owner.create_next_relationship().unwrap();

        assert_eq!(node.key, key);
        assert_eq!(relation.start_key, key);
        assert_eq!(entity.attributes["qualifiedName"], key.as_str());
        assert_eq!(catalog_relation.qualified_name_2, key);
    }
}

mod graph_tests {
    use super::*;

    #[test]
    fn test_node_cursor_yields_user_nodes() {
        let mut owner = sample_owner("x@y.com,z@y.com");

        let first = owner.create_next_node().unwrap();
        assert_eq!(first.key, "x@y.com");
        assert_eq!(first.label, USER_NODE_LABEL);
        assert_eq!(first.attributes[USER_NODE_EMAIL], "x@y.com");

        let second = owner.create_next_node().unwrap();
        assert_eq!(second.key, "z@y.com");

        assert!(owner.create_next_node().is_none());
    }

    #[test]
    fn test_relation_cursor_links_owner_to_table() {
        let mut owner = sample_owner("x@y.com");

        let relation = owner.create_next_relation().unwrap();
        assert_eq!(relation.start_key, "x@y.com");
        assert_eq!(relation.start_label, USER_NODE_LABEL);
        assert_eq!(relation.end_key, "hive://gold.default/events");
        assert_eq!(relation.end_label, TABLE_NODE_LABEL);
        assert_eq!(relation.relation_type, OWNER_OF_OBJECT_RELATION_TYPE);
        assert_eq!(relation.reverse_type, OWNER_RELATION_TYPE);
        assert!(relation.attributes.is_empty());

        assert!(owner.create_next_relation().is_none());
    }
}

mod relational_tests {
    use super::*;

    #[test]
    fn test_record_cursor_yields_user_then_join_row() {
        let mut owner = sample_owner("x@y.com");

        match owner.create_next_record().unwrap() {
            RelationalRecord::User(user) => {
                assert_eq!(user.rk, owner_key("x@y.com"));
                assert_eq!(user.email, "x@y.com");
            }
            other => panic!("expected user record first, got {other:?}"),
        }

        match owner.create_next_record().unwrap() {
            RelationalRecord::TableOwner(join) => {
                assert_eq!(join.user_rk, owner_key("x@y.com"));
                assert_eq!(join.table_rk, "hive://gold.default/events");
            }
            other => panic!("expected join record second, got {other:?}"),
        }

        assert!(owner.create_next_record().is_none());
    }

    #[test]
    fn test_two_records_per_owner() {
        let mut owner = sample_owner("a@b.com,c@d.com");
        let mut count = 0;
        while owner.create_next_record().is_some() {
            count += 1;
        }
        assert_eq!(count, 4);
    }
}

mod catalog_tests {
    use super::*;

    #[test]
    fn test_entity_cursor_yields_user_entities() {
        let mut owner = sample_owner("x@y.com");

        let entity = owner.create_next_entity().unwrap();
        assert_eq!(entity.type_name, USER_TYPE_NAME);
        assert_eq!(entity.operation, CatalogOperation::Create);
        assert_eq!(entity.attributes["email"], "x@y.com");
        assert!(entity.relationships.is_none());

        assert!(owner.create_next_entity().is_none());
    }

    #[test]
    fn test_relationship_cursor_links_table_to_user() {
        let mut owner = sample_owner("x@y.com");

        let relation = owner.create_next_relationship().unwrap();
        assert_eq!(relation.relationship_type, OWNERSHIP_RELATION_TYPE);
        assert_eq!(relation.entity_type_1, TABLE_TYPE_NAME);
        assert_eq!(relation.qualified_name_1, "hive://gold.default/events");
        assert_eq!(relation.entity_type_2, USER_TYPE_NAME);
        assert_eq!(relation.qualified_name_2, "x@y.com");

        assert!(owner.create_next_relationship().is_none());
    }
}

mod cursor_behavior_tests {
    use super::*;

    #[test]
    fn test_empty_owners_are_skipped_by_every_cursor() {
        let mut owner = sample_owner("a@b.com, ,c@d.com");
        assert_eq!(owner.owners(), &["a@b.com", "", "c@d.com"]);

        let nodes: Vec<_> = std::iter::from_fn(|| owner.create_next_node()).collect();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].key, "a@b.com");
        assert_eq!(nodes[1].key, "c@d.com");

        let relations: Vec<_> = std::iter::from_fn(|| owner.create_next_relation()).collect();
        assert_eq!(relations.len(), 2);

        let records: Vec<_> = std::iter::from_fn(|| owner.create_next_record()).collect();
        assert_eq!(records.len(), 4);

        let entities: Vec<_> = std::iter::from_fn(|| owner.create_next_entity()).collect();
        assert_eq!(entities.len(), 2);

        let catalog_relations: Vec<_> =
            std::iter::from_fn(|| owner.create_next_relationship()).collect();
        assert_eq!(catalog_relations.len(), 2);
    }

    #[test]
    fn test_all_empty_owner_list_exhausts_immediately() {
        let mut owner = sample_owner(" , ,");
        assert!(owner.create_next_node().is_none());
        assert!(owner.create_next_relation().is_none());
        assert!(owner.create_next_record().is_none());
        assert!(owner.create_next_entity().is_none());
        assert!(owner.create_next_relationship().is_none());
    }

    #[test]
    fn test_exhaustion_is_terminal() {
        let mut owner = sample_owner("x@y.com");
        while owner.create_next_node().is_some() {}

        assert!(owner.create_next_node().is_none());
        assert!(owner.create_next_node().is_none());
    }

    #[test]
    fn test_cursors_advance_independently() {
        let mut owner = sample_owner("a@b.com,c@d.com");

        // Drain the node cursor entirely; the others are untouched.
        while owner.create_next_node().is_some() {}

        assert!(owner.create_next_relation().is_some());
        assert!(owner.create_next_record().is_some());
        assert!(owner.create_next_entity().is_some());
        assert!(owner.create_next_relationship().is_some());
    }
}
