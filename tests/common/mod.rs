use klang::mach::{Event, Runtime};

/// Feeds one line to the runtime and renders the printable events the
/// way the terminal would, errors prefixed with `?`.
pub fn enter(runtime: &mut Runtime, line: &str) -> String {
    let mut out = String::new();
    for event in runtime.enter(line) {
        match event {
            Event::Print(s) => {
                out.push_str(&s);
                out.push('\n');
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    out.push_str(&format!("?{}\n", error));
                }
            }
            _ => {}
        }
    }
    out
}

/// A runtime with auto-print already switched on.
pub fn printing_runtime() -> Runtime {
    let mut runtime = Runtime::new();
    runtime.enter("\\t");
    runtime
}
