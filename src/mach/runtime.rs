use super::sequence::{shuffle, sort_down, sort_up};
use super::{Address, Operation, Program, Queue, Val};
use crate::error;
use crate::lang::ast::Statement;
use crate::lang::{Error, Line};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Runtime
///
/// Owns the program, the memory queue and the program counter.
/// `execute` never performs I/O; it hands back an `Event` for the host.

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    queue: Queue<Val>,
    pc: Address,
    state: State,
    rng: Option<StdRng>,
}

/// ## Events
///
/// Everything `execute` asks of its host.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// Nothing to do. The program has halted or was never loaded.
    Stopped,
    /// The cycle budget ran out. Call `execute` again to continue.
    Running,
    /// Text to write to standard output.
    Print(String),
    /// Show the prompt, then supply a line with `enter_input`.
    Input(String),
    /// The program halted with this exit value.
    Exit(i64),
    /// The program failed and has halted.
    Error(Error),
}

#[derive(Debug, PartialEq)]
enum State {
    Stopped,
    Running,
    Input(String),
    InputClosed,
    Interrupted,
}

enum Step {
    Next,
    Jump(Address),
    Print(String),
    Input(String),
    Exit(i64),
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime {
            program: Program::default(),
            queue: Queue::new(),
            pc: 0,
            state: State::Stopped,
            rng: None,
        }
    }
}

impl Runtime {
    /// Replace the program and prepare to run it from the first line.
    /// Fails, and leaves the runtime stopped, when the label pass fails.
    pub fn load<T: IntoIterator<Item = S>, S: Into<Line>>(&mut self, source: T) -> Result<()> {
        self.queue.clear();
        self.pc = 0;
        self.state = State::Stopped;
        self.program = Program::new(source)?;
        debug!(
            lines = self.program.len(),
            labels = self.program.link().len(),
            "loaded"
        );
        self.state = State::Running;
        Ok(())
    }

    /// Use a fixed seed for POKE instead of the wall clock.
    pub fn seed(&mut self, seed: u64) {
        self.rng = Some(StdRng::seed_from_u64(seed));
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn queue(&self) -> &Queue<Val> {
        &self.queue
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn interrupt(&mut self) {
        if self.state != State::Stopped {
            self.state = State::Interrupted;
        }
    }

    /// Answer the pending READ.
    pub fn enter_input(&mut self, s: &str) {
        if let State::Input(_) = self.state {
            let val = Val::from_input(s);
            debug!(line = self.pc, ?val, "input");
            self.queue.push(val);
            self.pc += 1;
            self.state = State::Running;
        }
    }

    /// No more input will arrive; the pending READ fails.
    pub fn close_input(&mut self) {
        if let State::Input(_) = self.state {
            self.state = State::InputClosed;
        }
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if let State::Input(prompt) = &self.state {
            return Event::Input(prompt.clone());
        }
        match self.state {
            State::Stopped => return Event::Stopped,
            State::InputClosed => return self.fail(error!(InvalidReadOperation)),
            State::Interrupted => return self.fail(error!(Break)),
            State::Running | State::Input(_) => {}
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => continue,
                Ok(Some(event)) => return event,
                Err(error) => return self.fail(error),
            }
        }
        Event::Running
    }

    fn fail(&mut self, error: Error) -> Event {
        self.state = State::Stopped;
        let error = error.in_line_number(self.pc);
        info!(%error, "program failed");
        Event::Error(error)
    }

    fn step(&mut self) -> Result<Option<Event>> {
        if self.pc >= self.program.len() {
            return Ok(Some(self.halt(0)));
        }
        let statement = match self.program.statement(self.pc)? {
            Some(statement) => statement,
            None => {
                self.pc += 1;
                return Ok(None);
            }
        };
        debug!(line = self.pc, ?statement);
        let step = self.statement(statement)?;
        trace!(queue = self.queue.len());
        Ok(match step {
            Step::Next => {
                self.pc += 1;
                None
            }
            Step::Jump(addr) => {
                self.pc = addr;
                None
            }
            Step::Print(s) => {
                self.pc += 1;
                if s.is_empty() {
                    None
                } else {
                    Some(Event::Print(s))
                }
            }
            Step::Input(prompt) => {
                self.state = State::Input(prompt.clone());
                Some(Event::Input(prompt))
            }
            Step::Exit(n) => Some(self.halt(n)),
        })
    }

    fn halt(&mut self, exit: i64) -> Event {
        info!(exit, line = self.pc, "program halted");
        self.state = State::Stopped;
        Event::Exit(exit)
    }

    fn statement(&mut self, statement: Statement) -> Result<Step> {
        use Statement::*;
        match statement {
            Add => self.binary(Operation::sum),
            AddK => self.binary_keep(Operation::sum),
            Sub => self.binary(Operation::subtract),
            SubK => self.binary_keep(Operation::subtract),
            Mul => self.binary(Operation::multiply),
            MulK => self.binary_keep(Operation::multiply),
            Div => self.binary(Operation::divide),
            DivK => self.binary_keep(Operation::divide),
            Mod => self.binary(Operation::remainder),
            ModK => self.binary_keep(Operation::remainder),
            // Reserved; inspects nothing the program can observe.
            Empty => Ok(Step::Next),
            Goto(target) => Ok(Step::Jump(self.program.resolve(&target)?)),
            If(relation, target) => {
                let addr = self.program.resolve(&target)?;
                let (one, two) = self.queue.front_2()?;
                if Operation::compare(one, two, relation)? {
                    Ok(Step::Jump(addr))
                } else {
                    Ok(Step::Next)
                }
            }
            Peek => Ok(Step::Print(self.queue.front()?.to_string())),
            PeekLn => Ok(Step::Print(format!("{}\n", self.queue.front()?))),
            Pop => Ok(Step::Print(self.queue.pop()?.to_string())),
            PopLn => Ok(Step::Print(format!("{}\n", self.queue.pop()?))),
            PopAll => Ok(Step::Print(
                self.queue.drain().iter().map(|v| v.to_string()).collect(),
            )),
            PopAllLn => Ok(Step::Print(
                self.queue
                    .drain()
                    .iter()
                    .map(|v| format!("{}\n", v))
                    .collect(),
            )),
            QDisplay => {
                let vals: Vec<String> = self.queue.iter().map(|v| v.to_string()).collect();
                Ok(Step::Print(format!("{}\n", vals.join(", "))))
            }
            Poke => {
                self.poke();
                Ok(Step::Next)
            }
            SortUp => {
                sort_up(&mut self.queue);
                Ok(Step::Next)
            }
            SortDown => {
                sort_down(&mut self.queue);
                Ok(Step::Next)
            }
            Print(literal) => Ok(Step::Print(match literal {
                Some(literal) => format!("{}\n", literal),
                None => "\n".to_string(),
            })),
            Push(literal) => {
                self.queue.push(literal.into());
                Ok(Step::Next)
            }
            Read(prompt) => Ok(Step::Input(match prompt {
                Some(prompt) => prompt.to_string(),
                None => String::new(),
            })),
            Ret => match self.queue.pop() {
                Err(_) => Err(error!(ReturnFromEmptyQueue)),
                Ok(Val::Integer(n)) => Ok(Step::Exit(n)),
                Ok(Val::String(_)) => Err(error!(NonIntegerReturnValue)),
            },
        }
    }

    fn binary(&mut self, op: fn(Val, Val) -> Result<Val>) -> Result<Step> {
        let (one, two) = self.queue.pop_2()?;
        self.queue.push(op(one, two)?);
        Ok(Step::Next)
    }

    /// Both operands stay where they are and the result joins the back.
    /// Equivalent to taking the first operand, appending the result,
    /// then putting the first operand back in front.
    fn binary_keep(&mut self, op: fn(Val, Val) -> Result<Val>) -> Result<Step> {
        let (one, two) = self.queue.front_2()?;
        let result = op(one.clone(), two.clone())?;
        self.queue.push(result);
        Ok(Step::Next)
    }

    fn poke(&mut self) {
        match &mut self.rng {
            Some(rng) => shuffle(&mut self.queue, rng),
            None => shuffle(&mut self.queue, &mut StdRng::seed_from_u64(clock_seed())),
        }
    }
}

fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_millis()) as u64
}
