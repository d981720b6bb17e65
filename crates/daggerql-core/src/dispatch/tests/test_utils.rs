use crate::dispatch::encode_result;
use crate::dispatch::function_failed;
use crate::dispatch::FunctionFuture;
use crate::dispatch::FunctionSpec;
use crate::dispatch::InputArgs;
use crate::dispatch::ModuleObject;
use std::cell::Cell;

thread_local! {
    static INVOCATIONS: Cell<usize> = const { Cell::new(0) };
}

/// Number of `Greeter` functions invoked on the current thread.
pub fn invocations() -> usize {
    INVOCATIONS.with(Cell::get)
}

fn record_invocation() {
    INVOCATIONS.with(|count| count.set(count.get() + 1));
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct Greeter {
    pub greeting: String,
    pub punctuation: String,
}
impl Default for Greeter {
    fn default() -> Self {
        Self {
            greeting: "Hello".to_string(),
            punctuation: "!".to_string(),
        }
    }
}
impl Greeter {
    fn hello(&self, name: String) -> String {
        format!("{}, {name}{}", self.greeting, self.punctuation)
    }

    fn repeat(&self, text: String, times: Option<i64>) -> Vec<String> {
        vec![text; times.unwrap_or(1).max(0) as usize]
    }
}
impl ModuleObject for Greeter {
    const NAME: &'static str = "Greeter";

    fn functions() -> Vec<FunctionSpec<Self>> {
        vec![
            FunctionSpec::new("hello", &["name"], |greeter: Greeter, args: InputArgs| -> FunctionFuture {
                Box::pin(async move {
                    let name: String = args.decode("name")?;
                    record_invocation();
                    encode_result(args.function(), greeter.hello(name))
                })
            })
            .with_description("Greets someone by name."),
            FunctionSpec::new("repeat", &["text", "times"], |greeter: Greeter, args: InputArgs| -> FunctionFuture {
                Box::pin(async move {
                    let text: String = args.decode("text")?;
                    let times: Option<i64> = args.decode("times")?;
                    record_invocation();
                    encode_result(args.function(), greeter.repeat(text, times))
                })
            }),
            FunctionSpec::new("fail", &[], |_: Greeter, args: InputArgs| -> FunctionFuture {
                Box::pin(async move {
                    record_invocation();
                    Err(function_failed(args.function(), "the greeter is tired"))
                })
            }),
        ]
    }
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct Counter {
    pub count: i64,
}
impl ModuleObject for Counter {
    const NAME: &'static str = "Counter";

    fn functions() -> Vec<FunctionSpec<Self>> {
        vec![FunctionSpec::new("current", &[], |counter: Counter, args: InputArgs| -> FunctionFuture {
            Box::pin(async move { encode_result(args.function(), counter.count) })
        })]
    }
}
