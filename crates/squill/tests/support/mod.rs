#![allow(dead_code)]

use squill::{
    AliasRegistry, Clause, Entity, EntityId, EntityResolver, Flavor, Result, SelectClause,
    SqlBuilder,
};

use anyhow::anyhow;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub struct User;
pub struct Order;

impl Entity for User {}
impl Entity for Order {}

/// Resolver with a fixed field-to-column scheme. `missing` has no mapping,
/// and `full_name` resolves with an embedded `AS` clause.
pub struct TestResolver;

impl EntityResolver for TestResolver {
    fn column(&self, _entity: EntityId, field: &str) -> Result<String> {
        match field {
            "missing" => Err(anyhow!("no column mapped for field `missing`")),
            "full_name" => Ok("full_name AS name".to_string()),
            _ => Ok(field.to_string()),
        }
    }

    fn columns(
        &self,
        _entity: EntityId,
        fields: &[&'static str],
        property_as_alias: bool,
    ) -> Result<Vec<String>> {
        Ok(fields
            .iter()
            .map(|field| {
                if property_as_alias {
                    format!("{field} AS {field}")
                } else {
                    field.to_string()
                }
            })
            .collect())
    }
}

/// Alias registry with interior mutability so bindings can land after a
/// clause has captured it, the way joins register aliases mid-chain.
#[derive(Default)]
pub struct TestAliases {
    aliases: RefCell<HashMap<EntityId, String>>,
}

impl TestAliases {
    pub fn bind<E: Entity>(&self, alias: &str) {
        self.aliases
            .borrow_mut()
            .insert(EntityId::of::<E>(), alias.to_string());
    }
}

impl AliasRegistry for TestAliases {
    fn resolve(&self, entity: EntityId) -> Option<String> {
        self.aliases.borrow().get(&entity).cloned()
    }
}

/// Minimal enclosing builder: canned base SQL plus appended fragments.
pub struct TestBuilder {
    base: String,
    appended: Vec<String>,
}

impl TestBuilder {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            appended: vec![],
        }
    }
}

impl SqlBuilder for TestBuilder {
    fn new_builder(&self) -> Box<dyn SqlBuilder> {
        Box::new(TestBuilder::new(&self.base))
    }

    fn to_sql(&self) -> String {
        let mut sql = self.base.clone();
        for fragment in &self.appended {
            sql.push(' ');
            sql.push_str(fragment);
        }
        sql
    }

    fn append(&mut self, _clause: Clause, sql: &str) {
        self.appended.push(sql.to_string());
    }
}

pub fn clause() -> SelectClause {
    clause_with(Rc::new(TestAliases::default()))
}

pub fn clause_with(registry: Rc<TestAliases>) -> SelectClause {
    SelectClause::new(
        Rc::new(TestBuilder::new("SELECT 1")),
        Rc::new(Flavor::Mysql),
        Rc::new(TestResolver),
        registry,
    )
}

/// A clause whose owning builder spawns nested builders over `base`.
pub fn clause_on(base: &str) -> SelectClause {
    SelectClause::new(
        Rc::new(TestBuilder::new(base)),
        Rc::new(Flavor::Mysql),
        Rc::new(TestResolver),
        Rc::new(TestAliases::default()),
    )
}
