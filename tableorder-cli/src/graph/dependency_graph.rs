//! Table dependency graph built from foreign key relationships
//!
//! An edge `A -> B` means "A has a foreign key referencing B", so B must exist
//! (and be populated) before A. This module provides:
//! - Graph construction from a schema description
//! - Dependency / dependent lookups
//! - Cycle detection with a concrete witness path
//! - Deterministic insert and drop orderings (Kahn's algorithm, lexical ties)

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crate::schema::SchemaDescription;

/// A single foreign key edge between two tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDependency {
    /// Table holding the foreign key
    pub source_table: String,
    /// Referenced table
    pub target_table: String,
    pub constraint_name: Option<String>,
    pub source_column: Option<String>,
    pub target_column: Option<String>,
    pub on_update: Option<String>,
    pub on_delete: Option<String>,
}

impl TableDependency {
    /// Create a bare edge with no constraint metadata
    pub fn new(source_table: &str, target_table: &str) -> Self {
        Self {
            source_table: source_table.to_string(),
            target_table: target_table.to_string(),
            constraint_name: None,
            source_column: None,
            target_column: None,
            on_update: None,
            on_delete: None,
        }
    }

    /// Whether the table references itself (e.g. a `parent_id` column)
    pub fn is_self_reference(&self) -> bool {
        self.source_table == self.target_table
    }
}

/// Which of the two orderings to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalOrder {
    /// Dependencies before dependents (safe to populate)
    Insert,
    /// Dependents before dependencies (safe to remove)
    Drop,
}

impl TraversalOrder {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Insert => "INSERT",
            Self::Drop => "DROP",
        }
    }
}

/// Per-table dependency summary used for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyInfo {
    /// Tables this table references
    pub dependencies: BTreeSet<String>,
    /// Tables referencing this table
    pub dependents: BTreeSet<String>,
    /// Number of referenced tables, excluding itself
    pub dependency_count: usize,
    /// Number of referencing tables, excluding itself
    pub dependent_count: usize,
    pub self_referencing: bool,
}

/// Whole-graph overview
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub total_tables: usize,
    /// Distinct cross-table relationships (self references not counted)
    pub total_relationships: usize,
    /// Raw foreign key records, including duplicates between the same pair
    pub total_foreign_keys: usize,
    pub self_referencing_tables: Vec<String>,
    /// Tables with no cross-table dependencies
    pub root_tables: Vec<String>,
    /// Tables nothing else depends on
    pub leaf_tables: Vec<String>,
    pub has_cycles: bool,
    pub cycle_path: Option<Vec<String>>,
}

/// Directed graph of foreign key dependencies between tables
///
/// Immutable after construction. `dependencies` and `dependents` are built
/// together from the edge list and always mirror each other.
#[derive(Debug, Clone, Default)]
pub struct TableDependencyGraph {
    tables: BTreeSet<String>,
    edges: Vec<TableDependency>,
    /// table -> tables it references
    dependencies: BTreeMap<String, BTreeSet<String>>,
    /// table -> tables referencing it
    dependents: BTreeMap<String, BTreeSet<String>>,
}

impl TableDependencyGraph {
    /// Build the graph from a loaded schema description
    pub fn from_schema(schema: &SchemaDescription) -> Self {
        let edges = schema
            .tables
            .iter()
            .flat_map(|(table, description)| {
                description.foreign_keys().iter().map(move |fk| TableDependency {
                    constraint_name: fk.constraint_name.clone(),
                    source_column: fk.column_name.clone(),
                    target_column: fk.foreign_column_name.clone(),
                    on_update: fk.on_update.clone(),
                    on_delete: fk.on_delete.clone(),
                    ..TableDependency::new(table, &fk.foreign_table_name)
                })
            })
            .collect();

        Self::from_edges(schema.tables.keys().cloned(), edges)
    }

    /// Build the graph from a table list and foreign key edges
    ///
    /// Tables that only appear as edge endpoints are added as nodes.
    pub fn from_edges<I>(tables: I, edges: Vec<TableDependency>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut graph = TableDependencyGraph {
            tables: tables.into_iter().collect(),
            ..Default::default()
        };

        for edge in &edges {
            for endpoint in [&edge.source_table, &edge.target_table] {
                if graph.tables.insert(endpoint.clone()) {
                    log::warn!(
                        "Table '{}' is referenced by a foreign key but not described in the schema",
                        endpoint
                    );
                }
            }
        }

        // Ensure every table has entries in both maps
        for name in &graph.tables {
            graph.dependencies.entry(name.clone()).or_default();
            graph.dependents.entry(name.clone()).or_default();
        }

        for edge in &edges {
            graph
                .dependencies
                .entry(edge.source_table.clone())
                .or_default()
                .insert(edge.target_table.clone());
            graph
                .dependents
                .entry(edge.target_table.clone())
                .or_default()
                .insert(edge.source_table.clone());
        }

        graph.edges = edges;

        log::debug!(
            "Built dependency graph: {} tables, {} foreign keys",
            graph.tables.len(),
            graph.edges.len()
        );

        graph
    }

    /// All tables in the graph
    pub fn get_tables(&self) -> BTreeSet<String> {
        self.tables.clone()
    }

    /// Number of tables in the graph
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Tables that `table` references. Empty for unknown tables.
    pub fn get_dependencies(&self, table: &str) -> BTreeSet<String> {
        self.dependencies.get(table).cloned().unwrap_or_default()
    }

    /// Tables referencing `table`. Empty for unknown tables.
    pub fn get_dependents(&self, table: &str) -> BTreeSet<String> {
        self.dependents.get(table).cloned().unwrap_or_default()
    }

    /// Every foreign key edge, including self references and duplicates
    pub fn edges(&self) -> &[TableDependency] {
        &self.edges
    }

    pub fn is_self_referencing(&self, table: &str) -> bool {
        self.dependencies
            .get(table)
            .is_some_and(|deps| deps.contains(table))
    }

    /// Check for cycles between distinct tables
    ///
    /// Self references are not reported; they never block ordering.
    pub fn has_cycles(&self) -> (bool, Option<Vec<String>>) {
        match self.topological_sort() {
            Ok(_) => (false, None),
            Err(err) => (true, Some(err.path)),
        }
    }

    /// Perform topological sort using Kahn's algorithm
    /// Returns tables in insert order (dependencies first)
    fn topological_sort(&self) -> Result<Vec<String>, CycleDetectionError> {
        // In-degree here is the number of distinct *other* tables a table
        // references; a self reference never has to wait on anything.
        let mut in_degree: BTreeMap<&str, usize> = self
            .dependencies
            .iter()
            .map(|(name, deps)| {
                let count = deps.iter().filter(|dep| *dep != name).count();
                (name.as_str(), count)
            })
            .collect();

        // Tables are released in waves: everything that becomes ready while a
        // wave is processed waits for the next one. Each wave is sorted, so
        // ties always break by ascending name.
        let mut wave: BTreeSet<&str> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(name, _)| *name)
            .collect();

        let mut result = Vec::with_capacity(self.tables.len());

        while !wave.is_empty() {
            let mut next = BTreeSet::new();

            for table in wave {
                result.push(table.to_string());

                let Some(dependents) = self.dependents.get(table) else {
                    continue;
                };
                for dependent in dependents {
                    if dependent == table {
                        continue;
                    }
                    if let Some(count) = in_degree.get_mut(dependent.as_str()) {
                        *count -= 1;
                        if *count == 0 {
                            next.insert(dependent.as_str());
                        }
                    }
                }
            }

            wave = next;
        }

        if result.len() != self.tables.len() {
            let placed: HashSet<&str> = result.iter().map(String::as_str).collect();
            let remaining: BTreeSet<&str> = self
                .tables
                .iter()
                .map(String::as_str)
                .filter(|t| !placed.contains(t))
                .collect();

            let path = self.find_cycle(&remaining).unwrap_or_else(|| {
                // Every stalled table still waits on another stalled table, so
                // the search above always finds a loop.
                remaining.iter().map(|t| t.to_string()).collect()
            });

            log::debug!("Topological sort stalled with {} tables left", remaining.len());

            return Err(CycleDetectionError {
                path,
                unresolved: remaining.into_iter().map(str::to_string).collect(),
            });
        }

        Ok(result)
    }

    /// Depth-first search over the stalled tables for one closed cycle
    fn find_cycle(&self, remaining: &BTreeSet<&str>) -> Option<Vec<String>> {
        let mut visited = HashSet::new();

        for &start in remaining {
            if visited.contains(start) {
                continue;
            }
            let mut path = Vec::new();
            let mut on_path = HashSet::new();
            if let Some(cycle) =
                self.visit(start, remaining, &mut visited, &mut path, &mut on_path)
            {
                return Some(cycle);
            }
        }

        None
    }

    fn visit<'a>(
        &'a self,
        table: &'a str,
        remaining: &BTreeSet<&'a str>,
        visited: &mut HashSet<&'a str>,
        path: &mut Vec<&'a str>,
        on_path: &mut HashSet<&'a str>,
    ) -> Option<Vec<String>> {
        visited.insert(table);
        path.push(table);
        on_path.insert(table);

        if let Some(deps) = self.dependencies.get(table) {
            for dep in deps.iter().map(String::as_str) {
                if dep == table || !remaining.contains(dep) {
                    continue;
                }
                if on_path.contains(dep) {
                    let start = path.iter().position(|t| *t == dep).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        path[start..].iter().map(|t| t.to_string()).collect();
                    cycle.push(dep.to_string());
                    return Some(cycle);
                }
                if !visited.contains(dep) {
                    if let Some(cycle) = self.visit(dep, remaining, visited, path, on_path) {
                        return Some(cycle);
                    }
                }
            }
        }

        path.pop();
        on_path.remove(table);
        None
    }

    /// Get insert order (dependencies before dependents)
    pub fn get_insert_order(&self) -> Result<Vec<String>, CycleDetectionError> {
        self.topological_sort()
    }

    /// Get drop order (dependents before dependencies - reverse of insert)
    pub fn get_drop_order(&self) -> Result<Vec<String>, CycleDetectionError> {
        let mut order = self.topological_sort()?;
        order.reverse();
        Ok(order)
    }

    /// Get either ordering
    pub fn order(&self, traversal: TraversalOrder) -> Result<Vec<String>, CycleDetectionError> {
        match traversal {
            TraversalOrder::Insert => self.get_insert_order(),
            TraversalOrder::Drop => self.get_drop_order(),
        }
    }

    /// Direct dependencies and dependents for every table
    pub fn get_dependency_info(&self) -> BTreeMap<String, DependencyInfo> {
        self.tables
            .iter()
            .map(|table| {
                let dependencies = self.get_dependencies(table);
                let dependents = self.get_dependents(table);
                let self_referencing = dependencies.contains(table);
                let info = DependencyInfo {
                    dependency_count: dependencies.iter().filter(|d| *d != table).count(),
                    dependent_count: dependents.iter().filter(|d| *d != table).count(),
                    dependencies,
                    dependents,
                    self_referencing,
                };
                (table.clone(), info)
            })
            .collect()
    }

    /// Build a whole-graph overview
    pub fn summary(&self) -> GraphSummary {
        let info = self.get_dependency_info();
        let (has_cycles, cycle_path) = self.has_cycles();

        GraphSummary {
            total_tables: self.tables.len(),
            total_relationships: info.values().map(|i| i.dependency_count).sum(),
            total_foreign_keys: self.edges.len(),
            self_referencing_tables: info
                .iter()
                .filter(|(_, i)| i.self_referencing)
                .map(|(name, _)| name.clone())
                .collect(),
            root_tables: info
                .iter()
                .filter(|(_, i)| i.dependency_count == 0)
                .map(|(name, _)| name.clone())
                .collect(),
            leaf_tables: info
                .iter()
                .filter(|(_, i)| i.dependent_count == 0)
                .map(|(name, _)| name.clone())
                .collect(),
            has_cycles,
            cycle_path,
        }
    }
}

/// Error when a cycle between distinct tables is detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleDetectionError {
    /// Closed cycle path, first table repeated at the end
    pub path: Vec<String>,
    /// Every table the sort could not place
    pub unresolved: Vec<String>,
}

impl std::fmt::Display for CycleDetectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Circular dependency detected: {}", self.path.join(" -> "))
    }
}

impl std::error::Error for CycleDetectionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_schema;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn graph(tables: &[&str], edges: &[(&str, &str)]) -> TableDependencyGraph {
        TableDependencyGraph::from_edges(
            tables.iter().map(|t| t.to_string()),
            edges
                .iter()
                .map(|(source, target)| TableDependency::new(source, target))
                .collect(),
        )
    }

    fn shop_graph() -> TableDependencyGraph {
        graph(
            &["users", "categories", "products", "orders", "order_items"],
            &[
                ("categories", "categories"),
                ("products", "categories"),
                ("orders", "users"),
                ("order_items", "orders"),
                ("order_items", "products"),
            ],
        )
    }

    fn position(order: &[String], table: &str) -> usize {
        order.iter().position(|t| t == table).unwrap()
    }

    /// Every cross-table dependency of T appears before T
    fn assert_respects_dependencies(graph: &TableDependencyGraph, order: &[String]) {
        for table in order {
            for dep in graph.get_dependencies(table) {
                if &dep == table {
                    continue;
                }
                assert!(
                    position(order, &dep) < position(order, table),
                    "{} must come before {}",
                    dep,
                    table
                );
            }
        }
    }

    #[test]
    fn test_dependency_maps_mirror_each_other() {
        let graph = shop_graph();

        for a in graph.get_tables() {
            for b in graph.get_tables() {
                assert_eq!(
                    graph.get_dependents(&a).contains(&b),
                    graph.get_dependencies(&b).contains(&a),
                );
            }
        }
    }

    #[test]
    fn test_shop_relationships() {
        let graph = shop_graph();

        assert_eq!(graph.get_dependencies("users"), BTreeSet::new());
        assert_eq!(
            graph.get_dependents("users"),
            BTreeSet::from(["orders".to_string()])
        );
        assert_eq!(
            graph.get_dependencies("categories"),
            BTreeSet::from(["categories".to_string()])
        );
        assert_eq!(
            graph.get_dependents("categories"),
            BTreeSet::from(["categories".to_string(), "products".to_string()])
        );
        assert_eq!(
            graph.get_dependencies("order_items"),
            BTreeSet::from(["orders".to_string(), "products".to_string()])
        );
        assert!(graph.get_dependents("order_items").is_empty());
    }

    #[test]
    fn test_unknown_table_has_no_dependencies() {
        let graph = shop_graph();
        assert!(graph.get_dependencies("nope").is_empty());
        assert!(graph.get_dependents("nope").is_empty());
    }

    #[test]
    fn test_shop_insert_order() {
        let graph = shop_graph();
        let order = graph.get_insert_order().unwrap();

        assert_eq!(
            order,
            vec!["categories", "users", "orders", "products", "order_items"]
        );
        assert_respects_dependencies(&graph, &order);

        for root in ["users", "categories"] {
            for middle in ["products", "orders"] {
                assert!(position(&order, root) < position(&order, middle));
                assert!(position(&order, middle) < position(&order, "order_items"));
            }
        }
    }

    #[test]
    fn test_roots_precede_released_dependents() {
        // `b` becomes ready as soon as `a` is placed, but `z` was ready first
        let graph = graph(&["a", "b", "z"], &[("b", "a")]);
        assert_eq!(graph.get_insert_order().unwrap(), vec!["a", "z", "b"]);

        // A plain lexical ready queue would give categories, products, users
        let order = shop_graph().get_insert_order().unwrap();
        assert_ne!(&order[..3], &["categories", "products", "users"]);
        assert!(position(&order, "users") < position(&order, "products"));
    }

    #[test]
    fn test_generated_dags_order_correctly() {
        let mut rng = StdRng::seed_from_u64(0x7ab1e);

        for _ in 0..200 {
            let size = rng.random_range(0..12);
            let mut names: Vec<String> = (0..size).map(|i| format!("t{:02}", i)).collect();
            names.shuffle(&mut rng);

            // Edges only point to earlier positions, plus optional self loops
            let mut edges = Vec::new();
            for i in 0..size {
                for j in 0..i {
                    if rng.random_bool(0.3) {
                        edges.push(TableDependency::new(&names[i], &names[j]));
                    }
                }
                if rng.random_bool(0.2) {
                    edges.push(TableDependency::new(&names[i], &names[i]));
                }
            }

            let graph = TableDependencyGraph::from_edges(names.iter().cloned(), edges);
            let insert = graph.get_insert_order().unwrap();
            let drop = graph.get_drop_order().unwrap();

            let mut sorted = insert.clone();
            sorted.sort();
            let mut expected = names.clone();
            expected.sort();
            assert_eq!(sorted, expected);

            assert_respects_dependencies(&graph, &insert);

            let mut reversed = insert.clone();
            reversed.reverse();
            assert_eq!(drop, reversed);
            assert_eq!(graph.has_cycles(), (false, None));
        }
    }

    #[test]
    fn test_shop_drop_order_is_reverse() {
        let graph = shop_graph();
        let mut insert = graph.get_insert_order().unwrap();
        let drop = graph.get_drop_order().unwrap();

        insert.reverse();
        assert_eq!(drop, insert);
        assert_eq!(graph.has_cycles(), (false, None));
    }

    #[test]
    fn test_drop_order_respects_dependents() {
        let graph = shop_graph();
        let drop = graph.get_drop_order().unwrap();

        // Every table is dropped before anything it references
        for table in &drop {
            for dependent in graph.get_dependents(table) {
                if &dependent == table {
                    continue;
                }
                assert!(position(&drop, &dependent) < position(&drop, table));
            }
        }
    }

    #[test]
    fn test_self_reference_does_not_block() {
        let graph = graph(&["account"], &[("account", "account")]);

        assert!(graph.is_self_referencing("account"));
        assert_eq!(graph.has_cycles(), (false, None));
        assert_eq!(graph.get_insert_order().unwrap(), vec!["account"]);
        assert_eq!(graph.get_drop_order().unwrap(), vec!["account"]);
    }

    #[test]
    fn test_two_table_cycle() {
        let graph = graph(&["a", "b"], &[("a", "b"), ("b", "a")]);

        let (has_cycles, path) = graph.has_cycles();
        assert!(has_cycles);
        assert_eq!(path.unwrap(), vec!["a", "b", "a"]);
        assert!(graph.get_insert_order().is_err());
        assert!(graph.get_drop_order().is_err());
    }

    #[test]
    fn test_three_table_cycle() {
        let graph = graph(
            &["table_a", "table_b", "table_c"],
            &[
                ("table_a", "table_b"),
                ("table_b", "table_c"),
                ("table_c", "table_a"),
            ],
        );

        let (has_cycles, path) = graph.has_cycles();
        assert!(has_cycles);
        assert_eq!(
            path.unwrap(),
            vec!["table_a", "table_b", "table_c", "table_a"]
        );

        let err = graph.get_insert_order().unwrap_err();
        assert_eq!(err.path.first(), err.path.last());
        assert_eq!(err.unresolved.len(), 3);
        assert_eq!(
            err.to_string(),
            "Circular dependency detected: table_a -> table_b -> table_c -> table_a"
        );
    }

    #[test]
    fn test_cycle_path_excludes_acyclic_tables() {
        // `log` depends on the cycle but is not part of it
        let graph = graph(
            &["a", "b", "log", "root"],
            &[("a", "b"), ("b", "a"), ("log", "a"), ("a", "root")],
        );

        let err = graph.get_insert_order().unwrap_err();
        assert!(!err.path.contains(&"log".to_string()));
        assert!(!err.path.contains(&"root".to_string()));
        assert!(err.unresolved.contains(&"log".to_string()));
    }

    #[test]
    fn test_empty_graph() {
        let graph = TableDependencyGraph::from_schema(&parse_schema(r#"{"tables": {}}"#).unwrap());

        assert!(graph.is_empty());
        assert_eq!(graph.get_insert_order().unwrap(), Vec::<String>::new());
        assert_eq!(graph.get_drop_order().unwrap(), Vec::<String>::new());
        assert_eq!(graph.has_cycles(), (false, None));
    }

    #[test]
    fn test_no_foreign_keys_is_deterministic() {
        let graph = graph(&["table3", "table1", "table2"], &[]);

        let first = graph.get_insert_order().unwrap();
        assert_eq!(first, vec!["table1", "table2", "table3"]);
        for _ in 0..10 {
            assert_eq!(graph.get_insert_order().unwrap(), first);
        }
    }

    #[test]
    fn test_duplicate_edges_collapse_for_ordering() {
        // Composite foreign key exported as two records
        let graph = graph(&["parent", "child"], &[("child", "parent"), ("child", "parent")]);

        assert_eq!(graph.edges().len(), 2);
        assert_eq!(graph.get_dependency_info()["child"].dependency_count, 1);
        assert_eq!(graph.get_insert_order().unwrap(), vec!["parent", "child"]);
    }

    #[test]
    fn test_undescribed_target_becomes_node() {
        let graph = graph(&["orders"], &[("orders", "users")]);

        assert!(graph.get_tables().contains("users"));
        assert_eq!(graph.get_insert_order().unwrap(), vec!["users", "orders"]);
    }

    #[test]
    fn test_chain_with_lexical_ties() {
        let graph = graph(
            &["grandparent", "parent", "child", "aardvark"],
            &[("parent", "grandparent"), ("child", "parent")],
        );

        assert_eq!(
            graph.get_insert_order().unwrap(),
            vec!["aardvark", "grandparent", "parent", "child"]
        );
    }

    #[test]
    fn test_order_dispatch() {
        let graph = shop_graph();
        assert_eq!(
            graph.order(TraversalOrder::Insert).unwrap(),
            graph.get_insert_order().unwrap()
        );
        assert_eq!(
            graph.order(TraversalOrder::Drop).unwrap(),
            graph.get_drop_order().unwrap()
        );
    }

    #[test]
    fn test_dependency_info_counts() {
        let info = shop_graph().get_dependency_info();

        let categories = &info["categories"];
        assert!(categories.self_referencing);
        assert_eq!(categories.dependency_count, 0);
        assert_eq!(categories.dependent_count, 1);

        let order_items = &info["order_items"];
        assert_eq!(order_items.dependency_count, 2);
        assert_eq!(order_items.dependent_count, 0);
    }

    #[test]
    fn test_summary() {
        let summary = shop_graph().summary();

        assert_eq!(summary.total_tables, 5);
        assert_eq!(summary.total_relationships, 4);
        assert_eq!(summary.total_foreign_keys, 5);
        assert_eq!(summary.self_referencing_tables, vec!["categories"]);
        assert_eq!(summary.root_tables, vec!["categories", "users"]);
        assert_eq!(summary.leaf_tables, vec!["order_items"]);
        assert!(!summary.has_cycles);
    }

    #[test]
    fn test_from_schema_keeps_constraint_metadata() {
        let schema = parse_schema(
            r#"{"tables": {
                "users": {"foreign_key_details": []},
                "orders": {"foreign_key_details": [{
                    "constraint_name": "orders_user_id_fkey",
                    "column_name": "user_id",
                    "foreign_table_name": "users",
                    "foreign_column_name": "id",
                    "on_update": "NO ACTION",
                    "on_delete": "CASCADE"
                }]}
            }}"#,
        )
        .unwrap();

        let graph = TableDependencyGraph::from_schema(&schema);
        let edge = &graph.edges()[0];

        assert_eq!(edge.source_table, "orders");
        assert_eq!(edge.target_table, "users");
        assert_eq!(edge.constraint_name.as_deref(), Some("orders_user_id_fkey"));
        assert_eq!(edge.on_delete.as_deref(), Some("CASCADE"));
        assert!(!edge.is_self_reference());
    }
}
