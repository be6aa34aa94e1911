//! VM state: operand stack, program, program counter.

use crate::context::Context;
use crate::error::{RuntimeError, Trap};
use crate::execute::Evaluate;
use crate::stack::OperandStack;
use picowasm_common::{Instruction, Program, Value, ValueType};
use tracing::{debug, trace};

/// The picowasm execution context.
///
/// A machine owns its program, fixed at construction, and an operand stack.
/// The program counter starts at 0 and advances by exactly one per
/// successful [`step`](Machine::step).
#[derive(Debug, Clone)]
pub struct Machine {
    /// Operand stack.
    stack: OperandStack,
    /// The program being executed.
    program: Program,
    /// Index of the next instruction to execute.
    pc: usize,
}

impl Machine {
    /// Create a machine for `program` with an empty stack and pc 0.
    pub fn new(program: impl Into<Program>) -> Self {
        Self {
            stack: OperandStack::new(),
            program: program.into(),
            pc: 0,
        }
    }

    /// Execute the instruction at the program counter, then advance it.
    ///
    /// If the instruction traps, the counter keeps pointing at it.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::ProgramCounterOutOfRange`] when the program has
    /// already finished, [`RuntimeError::Trap`] when the instruction fails.
    pub fn step(&mut self) -> Result<(), RuntimeError> {
        let instr = *self.fetch()?;
        trace!(pc = self.pc, %instr, depth = self.stack.size(), "step");

        if let Err(source) = instr.evaluate(self) {
            debug!(pc = self.pc, %instr, error = %source, "trap");
            return Err(RuntimeError::Trap {
                at: self.pc,
                mnemonic: instr.mnemonic(),
                source,
            });
        }

        self.pc += 1;
        Ok(())
    }

    /// Step until the program counter reaches the end of the program.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while !self.is_finished() {
            self.step()?;
        }
        Ok(())
    }

    /// Fetch the instruction at the current pc.
    fn fetch(&self) -> Result<&Instruction, RuntimeError> {
        self.program
            .get(self.pc)
            .ok_or(RuntimeError::ProgramCounterOutOfRange {
                pc: self.pc,
                len: self.program.len(),
            })
    }

    /// Index of the next instruction to execute.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// True once every instruction has been executed.
    pub fn is_finished(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// The program this machine executes.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// The stack contents, bottom to top.
    pub fn stack(&self) -> &[Value] {
        self.stack.values()
    }

    /// The top of the stack, if any.
    pub fn peek_top(&self) -> Option<&Value> {
        self.stack.peek().ok()
    }

    /// The operand stack itself, for callers that need more than a slice.
    pub fn operand_stack(&self) -> &OperandStack {
        &self.stack
    }
}

impl Context for Machine {
    fn push(&mut self, value: Value) {
        self.stack.push(value)
    }

    fn pop(&mut self) -> Result<Value, Trap> {
        self.stack.pop()
    }

    fn peek(&self) -> Result<&Value, Trap> {
        self.stack.peek()
    }

    fn pop_typed(&mut self, expected: ValueType) -> Result<Value, Trap> {
        self.stack.pop_typed(expected)
    }
}

/// Evaluate `instructions` in order against `ctx`, without a program counter.
///
/// Errors report the index within `instructions` of the failing one.
pub fn run_all<C: Context + ?Sized>(
    ctx: &mut C,
    instructions: &[Instruction],
) -> Result<(), RuntimeError> {
    for (at, instr) in instructions.iter().enumerate() {
        instr
            .evaluate(ctx)
            .map_err(|source| RuntimeError::Trap {
                at,
                mnemonic: instr.mnemonic(),
                source,
            })?;
    }
    Ok(())
}
