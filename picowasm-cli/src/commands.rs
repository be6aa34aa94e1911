//! CLI command implementations.

use std::fs;
use std::path::Path;

use picowasm_common::{Program, Value};
use picowasm_vm::Machine;
use tracing::info;

/// Assemble and execute a listing, printing the final stack bottom to top.
pub fn run(input: &Path, trace: bool) -> Result<(), i32> {
    let program = read_program(input)?;
    info!(instructions = program.len(), path = %input.display(), "running");

    let mut vm = Machine::new(program);
    while !vm.is_finished() {
        let pc = vm.pc();
        if let Err(e) = vm.step() {
            eprintln!("runtime error: {e}");
            return Err(2);
        }
        if trace {
            let instr = vm.program().instructions[pc];
            println!("[{pc}] {instr} -> [{}]", format_stack(vm.stack()));
        }
    }

    for value in vm.stack() {
        println!("{value}");
    }
    Ok(())
}

/// Print the canonical disassembly of a listing.
pub fn fmt(input: &Path) -> Result<(), i32> {
    let program = read_program(input)?;
    print!("{}", picowasm_assembler::disassemble(&program));
    Ok(())
}

fn read_program(path: &Path) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        1
    })?;

    picowasm_assembler::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}

fn format_stack(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
