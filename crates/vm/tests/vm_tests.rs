//! Integration tests for the picowasm VM.
//!
//! Organized by instruction group, followed by end-to-end stepping tests
//! and property tests for the arithmetic and ordering laws.

use picowasm_common::instruction::*;
use picowasm_common::{Instruction, Program, Value, ValueType};
use picowasm_vm::{run, run_all, Context, Machine, OperandStack, RuntimeError, Trap};
use proptest::prelude::*;

// ============================================================
// Helper functions
// ============================================================

/// i32.const shorthand.
fn konst(val: i32) -> Instruction {
    Instruction::i32_const(val)
}

/// Run a program from a list of instructions and return the final stack.
fn run_program(instructions: Vec<Instruction>) -> Result<Vec<Value>, RuntimeError> {
    run(Program::new(instructions))
}

/// Push `a` and `b`, apply `op`, and return the single resulting scalar.
fn check_binop(a: i32, b: i32, op: Instruction) -> i32 {
    let stack = run_program(vec![konst(a), konst(b), op]).unwrap();
    assert_eq!(stack.len(), 1, "binary op should leave exactly one value");
    stack[0].as_i32().unwrap()
}

fn i32s(values: &[i32]) -> Vec<Value> {
    values.iter().copied().map(Value::I32).collect()
}

// ============================================================
// End-to-end stepping
// ============================================================

#[test]
fn add_program_stepped_three_times() {
    let mut vm = Machine::new(vec![konst(42), konst(23), I32_ADD]);

    vm.step().unwrap();
    assert_eq!(vm.stack(), &[Value::I32(42)]);

    vm.step().unwrap();
    assert_eq!(vm.stack(), &[Value::I32(42), Value::I32(23)]);

    vm.step().unwrap();
    assert_eq!(vm.stack(), &[Value::I32(65)]);
    assert!(vm.is_finished());
}

#[test]
fn le_s_check_binop() {
    assert_eq!(check_binop(24, 23, I32_LE_S), 0);
    assert_eq!(check_binop(23, 23, I32_LE_S), 1);
    assert_eq!(check_binop(23, 24, I32_LE_S), 1);
}

#[test]
fn run_to_completion_matches_stepping() {
    let program = vec![konst(6), konst(7), I32_MUL, konst(2), I32_SUB];
    let mut vm = Machine::new(program.clone());
    for _ in 0..program.len() {
        vm.step().unwrap();
    }
    assert_eq!(run_program(program).unwrap(), vm.stack());
}

#[test]
fn empty_program_yields_empty_stack() {
    assert_eq!(run_program(vec![]), Ok(vec![]));
}

#[test]
fn stepping_past_end_fails() {
    let mut vm = Machine::new(vec![konst(1)]);
    vm.run().unwrap();
    assert_eq!(
        vm.step(),
        Err(RuntimeError::ProgramCounterOutOfRange { pc: 1, len: 1 })
    );
    assert_eq!(vm.stack(), &[Value::I32(1)]);
}

#[test]
fn program_is_not_mutated_by_execution() {
    let program = Program::new(vec![konst(1), konst(2), I32_ADD]);
    let mut vm = Machine::new(program.clone());
    vm.run().unwrap();
    assert_eq!(vm.program(), &program);
}

#[test]
fn shared_instructions_across_machines() {
    let program = Program::new(vec![konst(10), DROP, konst(4), NOP]);
    let mut a = Machine::new(program.clone());
    let mut b = Machine::new(program);
    a.run().unwrap();
    b.step().unwrap();
    assert_eq!(a.stack(), &[Value::I32(4)]);
    assert_eq!(b.stack(), &[Value::I32(10)]);
}

// ============================================================
// nop / drop / const
// ============================================================

#[test]
fn nop_changes_nothing_but_pc() {
    let mut vm = Machine::new(vec![konst(5), NOP]);
    vm.step().unwrap();
    let before = vm.stack().to_vec();
    vm.step().unwrap();
    assert_eq!(vm.stack(), before.as_slice());
    assert_eq!(vm.pc(), 2);
}

#[test]
fn drop_reduces_size_by_one() {
    let stack = run_program(vec![konst(1), konst(2), konst(3), DROP]).unwrap();
    assert_eq!(stack, i32s(&[1, 2]));
}

#[test]
fn drop_on_empty_stack_underflows() {
    assert_eq!(
        run_program(vec![DROP]),
        Err(RuntimeError::Trap {
            at: 0,
            mnemonic: "drop",
            source: Trap::StackUnderflow,
        })
    );
}

#[test]
fn const_extremes() {
    let stack = run_program(vec![konst(i32::MIN), konst(i32::MAX), konst(0)]).unwrap();
    assert_eq!(stack, i32s(&[i32::MIN, i32::MAX, 0]));
}

// ============================================================
// Arithmetic
// ============================================================

#[test]
fn add_sub_mul() {
    assert_eq!(check_binop(2, 3, I32_ADD), 5);
    assert_eq!(check_binop(2, 3, I32_SUB), -1);
    assert_eq!(check_binop(-4, 3, I32_MUL), -12);
}

#[test]
fn arithmetic_wraps() {
    assert_eq!(check_binop(i32::MIN, 1, I32_SUB), i32::MAX);
    assert_eq!(check_binop(i32::MAX, 2, I32_MUL), -2);
}

#[test]
fn div_s_truncates_toward_zero() {
    assert_eq!(check_binop(-7, 2, I32_DIV_S), -3);
    assert_eq!(check_binop(7, -2, I32_DIV_S), -3);
    assert_eq!(check_binop(9, 3, I32_DIV_S), 3);
    assert_eq!(check_binop(1, 2, I32_DIV_S), 0);
}

#[test]
fn div_s_by_zero_reports_position() {
    let err = run_program(vec![konst(1), konst(0), I32_DIV_S]).unwrap_err();
    assert_eq!(
        err,
        RuntimeError::Trap {
            at: 2,
            mnemonic: "i32.div_s",
            source: Trap::DivisionByZero,
        }
    );
    assert_eq!(err.to_string(), "integer divide by zero at instruction 2 (i32.div_s)");
}

#[test]
fn div_s_overflow_traps() {
    let err = run_program(vec![konst(i32::MIN), konst(-1), I32_DIV_S]).unwrap_err();
    assert_eq!(err.trap(), Some(&Trap::IntegerOverflow));
}

#[test]
fn binop_with_single_operand_underflows() {
    let mut vm = Machine::new(vec![konst(1), I32_MUL]);
    vm.step().unwrap();
    let err = vm.step().unwrap_err();
    assert_eq!(err.trap(), Some(&Trap::StackUnderflow));
    assert_eq!(vm.pc(), 1);
}

// ============================================================
// Comparison
// ============================================================

#[test]
fn eq_and_ne() {
    assert_eq!(check_binop(5, 5, I32_EQ), 1);
    assert_eq!(check_binop(5, 6, I32_EQ), 0);
    assert_eq!(check_binop(5, 5, I32_NE), 0);
    assert_eq!(check_binop(5, 6, I32_NE), 1);
}

#[test]
fn ordering_uses_deeper_operand_on_left() {
    assert_eq!(check_binop(1, 2, I32_LT_S), 1);
    assert_eq!(check_binop(2, 1, I32_LT_S), 0);
    assert_eq!(check_binop(2, 1, I32_GT_S), 1);
    assert_eq!(check_binop(1, 2, I32_GE_S), 0);
    assert_eq!(check_binop(2, 2, I32_GE_S), 1);
}

#[test]
fn ordering_is_signed() {
    assert_eq!(check_binop(-1, 0, I32_LT_S), 1);
    assert_eq!(check_binop(i32::MIN, i32::MAX, I32_LE_S), 1);
}

#[test]
fn comparison_result_feeds_arithmetic() {
    // (3 < 4) + (4 < 3) == 1
    let stack = run_program(vec![
        konst(3),
        konst(4),
        I32_LT_S,
        konst(4),
        konst(3),
        I32_LT_S,
        I32_ADD,
    ])
    .unwrap();
    assert_eq!(stack, i32s(&[1]));
}

// ============================================================
// Standalone operand stack
// ============================================================

#[test]
fn run_all_on_bare_stack() {
    let mut stack = OperandStack::new();
    run_all(&mut stack, &[konst(8), konst(2), I32_DIV_S]).unwrap();
    assert_eq!(stack.values(), &[Value::I32(4)]);
}

#[test]
fn bare_stack_pop_and_peek_underflow() {
    let mut stack = OperandStack::new();
    assert_eq!(stack.pop(), Err(Trap::StackUnderflow));
    assert_eq!(stack.peek(), Err(Trap::StackUnderflow));
    assert_eq!(stack.pop_typed(ValueType::I32), Err(Trap::StackUnderflow));
}

#[test]
fn pop_typed_through_context_trait() {
    fn pop_i32<C: Context>(ctx: &mut C) -> Result<Value, Trap> {
        ctx.pop_typed(ValueType::I32)
    }
    let mut stack = OperandStack::from(i32s(&[1, 2]));
    assert_eq!(pop_i32(&mut stack), Ok(Value::I32(2)));
    assert_eq!(stack.size(), 1);
}

// ============================================================
// Property tests
// ============================================================

proptest! {
    #[test]
    fn add_sub_mul_match_wrapping_arithmetic(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(check_binop(a, b, I32_ADD), a.wrapping_add(b));
        prop_assert_eq!(check_binop(a, b, I32_SUB), a.wrapping_sub(b));
        prop_assert_eq!(check_binop(a, b, I32_MUL), a.wrapping_mul(b));
    }

    #[test]
    fn div_s_matches_truncating_division(
        a in any::<i32>(),
        b in any::<i32>().prop_filter("non-zero divisor", |b| *b != 0),
    ) {
        prop_assume!(!(a == i32::MIN && b == -1));
        prop_assert_eq!(check_binop(a, b, I32_DIV_S), a / b);
    }

    #[test]
    fn ne_is_complement_of_eq(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(check_binop(a, b, I32_EQ), i32::from(a == b));
        prop_assert_eq!(check_binop(a, b, I32_NE), 1 - check_binop(a, b, I32_EQ));
    }

    #[test]
    fn exactly_one_of_lt_eq_gt(a in any::<i32>(), b in any::<i32>()) {
        let lt = check_binop(a, b, I32_LT_S);
        let eq = check_binop(a, b, I32_EQ);
        let gt = check_binop(a, b, I32_GT_S);
        prop_assert_eq!(lt + eq + gt, 1);
        prop_assert_eq!(check_binop(a, b, I32_LE_S), lt | eq);
        prop_assert_eq!(check_binop(a, b, I32_GE_S), gt | eq);
    }

    #[test]
    fn drop_after_push_restores_stack(
        prefix in prop::collection::vec(any::<i32>(), 0..16),
        pushed in any::<i32>(),
    ) {
        let mut program: Vec<Instruction> = prefix.iter().copied().map(konst).collect();
        program.push(konst(pushed));
        program.push(DROP);
        prop_assert_eq!(run_program(program).unwrap(), i32s(&prefix));
    }
}
