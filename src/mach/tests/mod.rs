use crate::mach::{Event, Runtime, Val};


fn runtime(src: &[&str]) -> Runtime {
    let mut r = Runtime::default();
    r.load(src.iter().copied()).unwrap();
    r.seed(0);
    r
}

fn run(runtime: &mut Runtime) -> String {
    run_to_end(runtime, 5000).0
}

/// Collect printed text until the runtime stops, fails, exits or asks for input.
fn run_to_end(runtime: &mut Runtime, cycles: usize) -> (String, Event) {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Print(ps) => s.push_str(ps),
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    return (s, event);
                }
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
                return (s, event);
            }
            Event::Stopped | Event::Input(_) | Event::Exit(_) => return (s, event),
        }
        prev_running = event == Event::Running;
    }
}

fn contents(runtime: &Runtime) -> Vec<Val> {
    runtime.queue().iter().cloned().collect()
}
