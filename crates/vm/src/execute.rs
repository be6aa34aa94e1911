//! Instruction evaluation.
//!
//! Every binary instruction is generated from two builders:
//!
//! - [`binary_op`] pops `c2` then `c1` (so `c1` is the deeper operand, the
//!   one pushed first), applies a scalar function to `(c1, c2)` and pushes
//!   the typed result.
//! - [`relational_op`] sits on top of `binary_op` and encodes a boolean
//!   comparison as `i32` 1 or 0.
//!
//! New arithmetic or comparison instructions supply a scalar function to
//! one of these builders. Nothing else in this module pops operands for a
//! binary instruction.

use crate::context::Context;
use crate::error::Trap;
use picowasm_common::{Instruction, Value, ValueType};

/// A Rust scalar that maps onto exactly one [`Value`] variant.
pub trait Scalar: Copy {
    /// The value type this scalar is stored as.
    const TYPE: ValueType;

    /// Extract the scalar from a value of type [`Self::TYPE`].
    fn from_value(value: Value) -> Option<Self>;

    /// Wrap the scalar in its value variant.
    fn into_value(self) -> Value;
}

impl Scalar for i32 {
    const TYPE: ValueType = ValueType::I32;

    fn from_value(value: Value) -> Option<Self> {
        value.as_i32()
    }

    fn into_value(self) -> Value {
        Value::I32(self)
    }
}

/// Evaluation semantics of an instruction.
pub trait Evaluate {
    /// Apply this instruction to `ctx`.
    fn evaluate<C: Context + ?Sized>(&self, ctx: &mut C) -> Result<(), Trap>;
}

impl Evaluate for Instruction {
    fn evaluate<C: Context + ?Sized>(&self, ctx: &mut C) -> Result<(), Trap> {
        match *self {
            Instruction::Nop => Ok(()),
            Instruction::Drop => ctx.pop().map(|_| ()),
            Instruction::I32Const(k) => {
                ctx.push(Value::I32(k));
                Ok(())
            }

            // Arithmetic
            Instruction::I32Add => binary_op(ctx, |c1: i32, c2: i32| Ok(c1.wrapping_add(c2))),
            Instruction::I32Sub => binary_op(ctx, |c1: i32, c2: i32| Ok(c1.wrapping_sub(c2))),
            Instruction::I32Mul => binary_op(ctx, |c1: i32, c2: i32| Ok(c1.wrapping_mul(c2))),
            Instruction::I32DivS => binary_op(ctx, div_s),

            // Comparison
            Instruction::I32Eq => relational_op(ctx, |c1: i32, c2: i32| c1 == c2),
            Instruction::I32Ne => relational_op(ctx, |c1: i32, c2: i32| c1 != c2),
            Instruction::I32LtS => relational_op(ctx, |c1: i32, c2: i32| c1 < c2),
            Instruction::I32GtS => relational_op(ctx, |c1: i32, c2: i32| c1 > c2),
            Instruction::I32LeS => relational_op(ctx, |c1: i32, c2: i32| c1 <= c2),
            Instruction::I32GeS => relational_op(ctx, |c1: i32, c2: i32| c1 >= c2),
        }
    }
}

/// Pop one operand of scalar type `T`.
fn pop_scalar<T: Scalar, C: Context + ?Sized>(ctx: &mut C) -> Result<T, Trap> {
    let value = ctx.pop_typed(T::TYPE)?;
    T::from_value(value).ok_or(Trap::TypeMismatch {
        expected: T::TYPE,
        found: value,
    })
}

/// Binary operator builder: pop `c2`, pop `c1`, push `op(c1, c2)`.
pub fn binary_op<T, R, C>(
    ctx: &mut C,
    op: impl FnOnce(T, T) -> Result<R, Trap>,
) -> Result<(), Trap>
where
    T: Scalar,
    R: Scalar,
    C: Context + ?Sized,
{
    let c2 = pop_scalar::<T, C>(ctx)?;
    let c1 = pop_scalar::<T, C>(ctx)?;
    ctx.push(op(c1, c2)?.into_value());
    Ok(())
}

/// Relational operator builder: like [`binary_op`], pushing `i32` 1 when
/// `cmp(c1, c2)` holds and 0 otherwise.
pub fn relational_op<T, C>(ctx: &mut C, cmp: impl FnOnce(T, T) -> bool) -> Result<(), Trap>
where
    T: Scalar,
    C: Context + ?Sized,
{
    binary_op(ctx, |c1: T, c2: T| Ok(i32::from(cmp(c1, c2))))
}

/// Signed division truncating toward zero, with WebAssembly trap rules.
fn div_s(c1: i32, c2: i32) -> Result<i32, Trap> {
    if c2 == 0 {
        return Err(Trap::DivisionByZero);
    }
    // Only i32::MIN / -1 overflows once the zero divisor is excluded.
    c1.checked_div(c2).ok_or(Trap::IntegerOverflow)
}
