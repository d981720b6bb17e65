use crate::engine::execute_list;
use crate::engine::DynClient;
use crate::engine::ExecutionError;
use crate::query_builder::Argument;
use crate::query_builder::QueryBuilder;
use crate::value::Value;
use std::marker::PhantomData;

/// A handle to a schema object: the selection that reaches it and the client
/// that will eventually execute a leaf selection beneath it. Constructing a
/// handle never talks to the endpoint.
pub trait Object: Sized {
    fn from_query(query: QueryBuilder, client: DynClient) -> Self;

    fn query(&self) -> &QueryBuilder;

    fn client(&self) -> &DynClient;
}

/// A selection that yields a list of objects.
///
/// Nothing is sent until [`ObjectList::resolve()`], which requests the ids of
/// every element and then binds one handle per id through the schema's
/// `load<Type>FromID` root field.
#[derive(Debug)]
pub struct ObjectList<T> {
    query: QueryBuilder,
    client: DynClient,
    load_field: &'static str,
    marker: PhantomData<fn() -> T>,
}
impl<T> Clone for ObjectList<T> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            client: self.client.clone(),
            load_field: self.load_field,
            marker: PhantomData,
        }
    }
}
impl<T: Object> ObjectList<T> {
    /// `query` must already end in the `id` selection (see
    /// [`QueryBuilder::select_object_list()`]).
    pub fn new(query: QueryBuilder, client: DynClient, load_field: &'static str) -> Self {
        Self {
            query,
            client,
            load_field,
            marker: PhantomData,
        }
    }

    pub fn query(&self) -> &QueryBuilder {
        &self.query
    }

    pub async fn resolve(&self) -> Result<Vec<T>, ExecutionError> {
        let ids: Vec<String> = execute_list(self.client.as_ref(), &self.query).await?;
        Ok(ids
            .into_iter()
            .map(|id| {
                let query = QueryBuilder::new().select_with_args(
                    self.load_field,
                    vec![Argument::new("id", Value::String(id))],
                );
                T::from_query(query, self.client.clone())
            })
            .collect())
    }
}
