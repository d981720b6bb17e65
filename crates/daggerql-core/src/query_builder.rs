use crate::value::Value;
use std::sync::Arc;

/// A named argument attached to one selection of a [`QueryBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    name: String,
    value: Value,
}
impl Argument {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

#[derive(Debug, PartialEq)]
struct Selection {
    arguments: Vec<Argument>,
    field: String,
    parent: Option<Arc<Selection>>,
}

/// An immutable chain of field selections, e.g.
/// `container.from(address: "alpine").id`.
///
/// Every `select*()` call returns a new builder and leaves `self` untouched.
/// Builders that extend the same prefix share it, so forking a chain is
/// cheap:
///
/// ```
/// use daggerql_core::QueryBuilder;
///
/// let container = QueryBuilder::new().select("container");
/// let id = container.select("id");
/// let stdout = container.select("stdout");
///
/// assert_eq!(id.render(), "container{id}");
/// assert_eq!(stdout.render(), "container{stdout}");
/// assert_eq!(container.render(), "container");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryBuilder {
    last: Option<Arc<Selection>>,
}
impl QueryBuilder {
    pub fn new() -> Self {
        Self { last: None }
    }

    pub fn select(&self, field: &str) -> Self {
        self.select_with_args(field, vec![])
    }

    pub fn select_with_args(&self, field: &str, arguments: Vec<Argument>) -> Self {
        Self {
            last: Some(Arc::new(Selection {
                arguments,
                field: field.to_string(),
                parent: self.last.clone(),
            })),
        }
    }

    /// Selects a field returning a list of objects. Only each element's `id`
    /// can be selected in the same request, so it is appended here.
    pub fn select_object_list(&self, field: &str, arguments: Vec<Argument>) -> Self {
        self.select_with_args(field, arguments).select("id")
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Field names from the root selection to the last one.
    pub fn path(&self) -> Vec<&str> {
        self.selections()
            .into_iter()
            .map(|selection| selection.field.as_str())
            .collect()
    }

    /// The first argument holding a NaN or infinite float, as
    /// `field.argument`.
    pub fn non_finite_argument(&self) -> Option<String> {
        self.selections().into_iter().find_map(|selection| {
            selection
                .arguments
                .iter()
                .find(|argument| !argument.value().is_finite())
                .map(|argument| format!("{}.{}", selection.field, argument.name()))
        })
    }

    /// Renders the nested selection text without the enclosing operation.
    pub fn render(&self) -> String {
        let selections = self.selections();
        let mut out = String::new();
        for (index, selection) in selections.iter().enumerate() {
            if index > 0 {
                out.push('{');
            }
            out.push_str(selection.field.as_str());
            if !selection.arguments.is_empty() {
                out.push('(');
                for (arg_index, argument) in selection.arguments.iter().enumerate() {
                    if arg_index > 0 {
                        out.push(',');
                    }
                    out.push_str(argument.name());
                    out.push(':');
                    out.push_str(argument.value().render().as_str());
                }
                out.push(')');
            }
        }
        for _ in 1..selections.len() {
            out.push('}');
        }
        out
    }

    /// The complete request document, e.g. `query{container{id}}`.
    pub fn to_query_string(&self) -> String {
        format!("query{{{}}}", self.render())
    }

    fn selections(&self) -> Vec<&Selection> {
        let mut selections = vec![];
        let mut current = self.last.as_deref();
        while let Some(selection) = current {
            selections.push(selection);
            current = selection.parent.as_deref();
        }
        selections.reverse();
        selections
    }
}
impl std::fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.render().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ToValue;

    #[test]
    fn renders_nested_selections_with_arguments() {
        let query = QueryBuilder::new()
            .select("container")
            .select_with_args("from", vec![Argument::new("address", "alpine".to_value())])
            .select("id");

        assert_eq!(query.render(), "container{from(address:\"alpine\"){id}}");
        assert_eq!(
            query.to_query_string(),
            "query{container{from(address:\"alpine\"){id}}}",
        );
        assert_eq!(query.path(), vec!["container", "from", "id"]);
    }

    #[test]
    fn multiple_arguments_are_comma_separated_in_order() {
        let query = QueryBuilder::new().select_with_args("withEnvVariable", vec![
            Argument::new("name", "A".to_value()),
            Argument::new("value", "1".to_value()),
            Argument::new("expand", true.to_value()),
        ]);

        assert_eq!(query.render(), "withEnvVariable(name:\"A\",value:\"1\",expand:true)");
    }

    #[test]
    fn extending_a_builder_leaves_the_original_untouched() {
        let base = QueryBuilder::new().select("container");
        let first = base.select("stdout");
        let second = base.select_with_args("withExec", vec![
            Argument::new("args", vec!["ls"].to_value()),
        ]);

        assert_eq!(base.render(), "container");
        assert_eq!(first.render(), "container{stdout}");
        assert_eq!(second.render(), "container{withExec(args:[\"ls\"])}");
    }

    #[test]
    fn names_the_first_non_finite_argument() {
        let finite = QueryBuilder::new()
            .select_with_args("withScale", vec![Argument::new("factor", 2.5.to_value())]);
        let query = finite
            .select_with_args("withRatio", vec![
                Argument::new("name", "r".to_value()),
                Argument::new("ratio", f64::NEG_INFINITY.to_value()),
            ])
            .select("id");

        assert_eq!(finite.non_finite_argument(), None);
        assert_eq!(query.non_finite_argument(), Some("withRatio.ratio".to_string()));
    }

    #[test]
    fn object_lists_select_their_ids() {
        let query = QueryBuilder::new()
            .select("container")
            .select_object_list("envVariables", vec![]);

        assert_eq!(query.render(), "container{envVariables{id}}");
    }

    #[test]
    fn empty_builder_renders_nothing() {
        let query = QueryBuilder::new();

        assert!(query.is_empty());
        assert_eq!(query.render(), "");
        assert!(query.path().is_empty());
    }
}
