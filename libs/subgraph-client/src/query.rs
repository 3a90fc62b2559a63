use serde_json::Value;

/// Rows requested per page. Subgraph endpoints cap `first` at 1000.
pub const PAGE_SIZE: usize = 1000;

/// One `where` clause on an entity query.
#[derive(Debug, Clone, PartialEq)]
pub enum Where {
    /// `field_in: ["a", "b", ...]`
    In(&'static str, Vec<String>),
    /// `field: "value"`
    Eq(&'static str, String),
    /// `field: true | false`
    Bool(&'static str, bool),
    /// `field_gt: n`
    Gt(&'static str, u64),
}

impl Where {
    fn render(&self) -> String {
        match self {
            Where::In(field, values) => {
                let list: Vec<String> = values.iter().map(|v| quote(v)).collect();
                format!("{field}_in: [{}]", list.join(", "))
            }
            Where::Eq(field, value) => format!("{field}: {}", quote(value)),
            Where::Bool(field, value) => format!("{field}: {value}"),
            Where::Gt(field, value) => format!("{field}_gt: {value}"),
        }
    }
}

// GraphQL string literals share JSON's quoting rules.
fn quote(value: &str) -> String {
    Value::String(value.to_owned()).to_string()
}

/// Description of one paged entity query: the root list field, the fields
/// requested per row, filters, an optional block pin, and the pagination
/// window.
#[derive(Debug, Clone)]
pub struct PagedQuery {
    pub root: &'static str,
    pub fields: &'static [&'static str],
    pub wheres: Vec<Where>,
    pub block: Option<u64>,
    pub first: usize,
    pub skip: usize,
}

impl PagedQuery {
    pub fn new(root: &'static str, fields: &'static [&'static str]) -> Self {
        Self {
            root,
            fields,
            wheres: Vec::new(),
            block: None,
            first: PAGE_SIZE,
            skip: 0,
        }
    }

    pub fn filter(mut self, clause: Where) -> Self {
        self.wheres.push(clause);
        self
    }

    /// Pin every page of this query to a single block height. `None` reads
    /// the chain head, which may drift between pages.
    pub fn at_block(mut self, block: Option<u64>) -> Self {
        self.block = block;
        self
    }

    /// Render the query as a GraphQL document.
    pub fn render(&self) -> String {
        let mut args = format!("first: {}, skip: {}", self.first, self.skip);

        if let Some(number) = self.block {
            args.push_str(&format!(", block: {{ number: {number} }}"));
        }

        if !self.wheres.is_empty() {
            let clauses: Vec<String> = self.wheres.iter().map(Where::render).collect();
            args.push_str(&format!(", where: {{ {} }}", clauses.join(", ")));
        }

        format!(
            "query {{ {}({}) {{ {} }} }}",
            self.root,
            args,
            self.fields.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pagination_and_fields() {
        let query = PagedQuery::new("rentalAssets", &["id", "tokenId"]);

        assert_eq!(
            query.render(),
            "query { rentalAssets(first: 1000, skip: 0) { id tokenId } }"
        );
    }

    #[test]
    fn renders_filters_block_and_skip() {
        let mut query = PagedQuery::new("estates", &["tokenId", "size"])
            .filter(Where::In("tokenId", vec!["1".into(), "2".into()]))
            .filter(Where::Eq("category", "estate".into()))
            .filter(Where::Gt("size", 0))
            .filter(Where::Bool("isClaimed", false))
            .at_block(Some(123456));
        query.skip = 2000;

        assert_eq!(
            query.render(),
            "query { estates(first: 1000, skip: 2000, block: { number: 123456 }, \
             where: { tokenId_in: [\"1\", \"2\"], category: \"estate\", size_gt: 0, \
             isClaimed: false }) { tokenId size } }"
        );
    }

    #[test]
    fn escapes_string_values() {
        let query =
            PagedQuery::new("items", &["id"]).filter(Where::Eq("name", "say \"hi\"".into()));

        assert!(query.render().contains(r#"name: "say \"hi\"""#));
    }
}
