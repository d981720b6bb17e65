mod function_method;
mod object_impl;


/// Exposes the methods of an inherent `impl` block as module functions by
/// implementing [`ModuleObject`](daggerql::dispatch::ModuleObject) for the
/// type.
///
/// Only `pub` methods marked with `#[function]` are exposed. Each one is registered
/// under its name exactly as written, its parameters become the function's
/// arguments (in order, under the same names) and its doc comment becomes the
/// function's description. Methods may be `async`, and a method returning a
/// `Result` reports its `Err` to the host as a failed call.
///
/// The type must be `Default + Serialize + Deserialize`: its serialized form
/// is the state the host passes back on every call.
///
/// Example usage:
///
/// ```rust
/// use daggerql::macros::object;
/// use daggerql::serde;
///
/// #[derive(Default, serde::Deserialize, serde::Serialize)]
/// #[serde(crate = "daggerql::serde")]
/// struct Greeter {
///     greeting: String,
/// }
///
/// #[object]
/// impl Greeter {
///     /// Greets someone by name.
///     #[function]
///     pub fn hello(&self, name: &str) -> String {
///         format!("{}, {name}!", self.greeting)
///     }
///
///     // Not exposed.
///     fn shout(&self) -> String {
///         self.greeting.to_uppercase()
///     }
/// }
///
/// let registry = daggerql::dispatch::Registry::new().object::<Greeter>();
/// let greeter = registry.describe();
/// let functions = greeter.objects()[0].functions();
///
/// assert_eq!(functions.len(), 1);
/// assert_eq!(functions[0].name(), "hello");
/// assert_eq!(functions[0].args()[0].name(), "name");
/// assert_eq!(functions[0].description(), Some("Greets someone by name."));
/// ```
#[proc_macro_attribute]
pub fn object(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = proc_macro2::TokenStream::from(attr);
    let item = proc_macro2::TokenStream::from(item);

    match object_impl::expand(attr, item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
