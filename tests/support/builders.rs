use bomcheck::db::Database;
use bomcheck::value::{Record, Value};

/// Builds an in-memory database that passes validation unless modified.
pub struct DatabaseBuilder {
    suppliers: Record,
    components: Record,
    configuration: Record,
}

impl DatabaseBuilder {
    /// One USD supplier, one component `C1` with a description and no supply
    /// data, and a configuration whose default list references `C1`.
    pub fn new() -> Self {
        Self {
            suppliers: Record::new().with(
                "acme",
                Record::new()
                    .with("title", "ACME Electronics")
                    .with("homepage", "https://acme.example.com")
                    .with("currency", "USD"),
            ),
            components: Record::new().with("C1", Self::part("Capacitor")),
            configuration: Record::new()
                .with("title", "Kit")
                .with("description", "Starter kit")
                .with("components", vec!["C1"])
                .with("sections", Record::new())
                .with("section_order", Vec::<&str>::new()),
        }
    }

    /// A live component with a description and no supply data.
    pub fn part(title: &str) -> Record {
        Record::new()
            .with("title", title)
            .with("description", format!("{} for testing", title))
    }

    pub fn with_component(mut self, id: &str, component: Record) -> Self {
        self.components.insert(id, component);
        self
    }

    pub fn with_supplier(mut self, name: &str, supplier: Record) -> Self {
        self.suppliers.insert(name, supplier);
        self
    }

    /// Add a section and append it to `section_order`.
    pub fn with_section(mut self, name: &str, section: Record) -> Self {
        let mut sections = self
            .configuration
            .get("sections")
            .and_then(Value::as_map)
            .cloned()
            .unwrap_or_default();
        sections.insert(name, section);

        let mut order: Vec<Value> = self
            .configuration
            .get("section_order")
            .and_then(Value::as_list)
            .map(<[Value]>::to_vec)
            .unwrap_or_default();
        order.push(Value::from(name));

        self.configuration.insert("sections", sections);
        self.configuration.insert("section_order", Value::List(order));
        self
    }

    pub fn with_config_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.configuration.insert(key, value);
        self
    }

    pub fn build(self) -> Database {
        Database::new(self.suppliers, self.components, self.configuration)
    }
}

/// A section with bounds `min <= value <= max` and the given components.
pub fn section(min: i64, value: i64, max: i64, components: Vec<&str>) -> Record {
    Record::new()
        .with("title", "Options")
        .with("description", "Optional extras")
        .with("value", value)
        .with("min", min)
        .with("max", max)
        .with("components", components)
}
