use qu::mach::{Event, Runtime};

pub fn runtime(src: &[&str]) -> Runtime {
    let mut runtime = Runtime::default();
    runtime.load(src.iter().copied()).unwrap();
    runtime
}

pub fn exec(src: &[&str]) -> String {
    exec_n(&mut runtime(src), 5000).0
}

/// Printed text, with errors appended as `?MESSAGE`, plus the final event.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> (String, Event) {
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
