//! Technical jargon catalog
//!
//! Keyed by the lowercase form as it appears in text; `term` keeps the
//! conventional display casing ("API", "GraphQL"). Complexity tiers: 1 basic,
//! 2 intermediate, 3 advanced.

use std::collections::HashMap;
use std::sync::OnceLock;

/// A technical term with metadata
#[derive(Debug, Clone, Copy)]
pub struct JargonTerm {
    /// Display form ("API", not "api")
    pub term: &'static str,
    pub category: &'static str,
    /// 1 = basic, 2 = intermediate, 3 = advanced
    pub complexity: u8,
    pub requires_definition: bool,
    /// Domains where this term is common currency
    pub common_in: &'static [&'static str],
}

macro_rules! entry {
    ($key:literal, $term:literal, $cat:literal, $cx:literal, $def:literal, [$($dom:literal),*]) => {
        ($key, JargonTerm {
            term: $term,
            category: $cat,
            complexity: $cx,
            requires_definition: $def,
            common_in: &[$($dom),*],
        })
    };
}

const CATALOG: &[(&str, JargonTerm)] = &[
    // Tier 1: basic terms most developers know
    entry!("api", "API", "web", 1, true, ["web", "backend", "mobile"]),
    entry!("json", "JSON", "data", 1, true, ["web", "backend"]),
    entry!("html", "HTML", "web", 1, false, ["web", "frontend"]),
    entry!("css", "CSS", "web", 1, false, ["web", "frontend"]),
    entry!("url", "URL", "web", 1, false, ["web"]),
    entry!("http", "HTTP", "web", 1, true, ["web", "backend"]),
    entry!("https", "HTTPS", "web", 1, true, ["web", "security"]),
    entry!("database", "database", "data", 1, false, ["backend", "data"]),
    entry!("server", "server", "infrastructure", 1, false, ["backend", "devops"]),
    entry!("client", "client", "architecture", 1, false, ["web", "mobile"]),
    // Tier 2: intermediate
    entry!("rest", "REST", "web", 2, true, ["web", "backend"]),
    entry!("graphql", "GraphQL", "web", 2, true, ["web", "backend"]),
    entry!("sdk", "SDK", "development", 2, true, ["mobile", "integration"]),
    entry!("cli", "CLI", "development", 2, true, ["devops", "tools"]),
    entry!("orm", "ORM", "data", 2, true, ["backend", "data"]),
    entry!("crud", "CRUD", "data", 2, true, ["backend", "web"]),
    entry!("mvc", "MVC", "architecture", 2, true, ["web", "backend"]),
    entry!("sql", "SQL", "data", 2, true, ["backend", "data"]),
    entry!("async", "async", "programming", 2, true, ["backend", "frontend"]),
    entry!("callback", "callback", "programming", 2, true, ["frontend", "backend"]),
    entry!("promise", "promise", "programming", 2, true, ["frontend", "backend"]),
    entry!("middleware", "middleware", "architecture", 2, true, ["backend", "web"]),
    entry!("endpoint", "endpoint", "web", 2, true, ["web", "backend"]),
    entry!("payload", "payload", "web", 2, true, ["web", "backend"]),
    entry!("schema", "schema", "data", 2, true, ["backend", "data"]),
    entry!("migration", "migration", "data", 2, true, ["backend", "data"]),
    entry!("webhook", "webhook", "web", 2, true, ["web", "integration"]),
    entry!("docker", "Docker", "devops", 2, true, ["devops", "backend"]),
    entry!("container", "container", "devops", 2, true, ["devops", "backend"]),
    // Tier 3: advanced
    entry!("kubernetes", "Kubernetes", "devops", 3, true, ["devops"]),
    entry!("microservices", "microservices", "architecture", 3, true, ["backend", "devops"]),
    entry!("idempotent", "idempotent", "architecture", 3, true, ["backend", "api"]),
    entry!("polymorphism", "polymorphism", "programming", 3, true, ["oop"]),
    entry!("encapsulation", "encapsulation", "programming", 3, true, ["oop"]),
    entry!("abstraction", "abstraction", "programming", 3, true, ["oop", "architecture"]),
    entry!("singleton", "singleton", "patterns", 3, true, ["oop", "architecture"]),
    entry!("factory", "factory", "patterns", 3, true, ["oop", "architecture"]),
    entry!("observer", "observer", "patterns", 3, true, ["oop", "architecture"]),
    entry!("decorator", "decorator", "patterns", 3, true, ["oop", "python"]),
    entry!("sharding", "sharding", "data", 3, true, ["data", "scaling"]),
    entry!("replication", "replication", "data", 3, true, ["data", "scaling"]),
    entry!("normalization", "normalization", "data", 3, true, ["data"]),
    entry!("denormalization", "denormalization", "data", 3, true, ["data"]),
    entry!("terraform", "Terraform", "devops", 3, true, ["devops", "iac"]),
    entry!("observability", "observability", "devops", 3, true, ["devops", "monitoring"]),
    entry!("telemetry", "telemetry", "devops", 3, true, ["devops", "monitoring"]),
];

/// Catalog of known technical terms, keyed by lowercase word
pub fn jargon_catalog() -> &'static HashMap<&'static str, JargonTerm> {
    static TABLE: OnceLock<HashMap<&'static str, JargonTerm>> = OnceLock::new();
    TABLE.get_or_init(|| CATALOG.iter().map(|(k, t)| (*k, *t)).collect())
}
