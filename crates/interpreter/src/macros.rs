//! Utility macros for implementing opcode instruction functions.

/// Fails the instruction if the current call is static.
#[macro_export]
macro_rules! require_non_staticcall {
    ($interp:expr $(,$ret:expr)?) => {
        if $interp.is_static {
            $interp.instruction_result =
                $crate::InstructionResult::StateChangeDuringStaticCall;
            return $($ret)?;
        }
    };
}

/// Checks that the given fork is enabled, and fails the instruction with
/// `NotActivated` if it is not.
#[macro_export]
macro_rules! check {
    ($interp:expr, $min:ident $(,$ret:expr)?) => {
        if !$interp
            .spec_id
            .is_enabled_in(primitives::hardfork::SpecId::$min)
        {
            $interp.instruction_result = $crate::InstructionResult::NotActivated;
            return $($ret)?;
        }
    };
}

/// Records a gas cost and fails the instruction if it would exceed the
/// remaining gas. The cost is either charged in full or not at all.
#[macro_export]
macro_rules! gas {
    ($interp:expr, $gas:expr) => {
        $crate::gas!($interp, $gas, ())
    };
    ($interp:expr, $gas:expr, $ret:expr) => {
        if !$interp.gas.record_cost($gas) {
            $interp.instruction_result = $crate::InstructionResult::OutOfGas;
            return $ret;
        }
    };
}

/// Pops n values from the stack. Fails the instruction if n values can't be
/// popped.
#[macro_export]
macro_rules! popn {
    ([ $($x:ident),* ], $interp:expr $(,$ret:expr)? ) => {
        let Some([$( $x ),*]) = $interp.stack.popn() else {
            $interp.instruction_result = $crate::InstructionResult::StackUnderflow;
            return $($ret)?;
        };
    };
}

/// Pops n values from the stack and returns a mutable reference to the new
/// top. Fails the instruction if the stack is too shallow.
#[macro_export]
macro_rules! popn_top {
    ([ $($x:ident),* ], $top:ident, $interp:expr $(,$ret:expr)? ) => {
        let Some(([$( $x ),*], $top)) = $interp.stack.popn_top() else {
            $interp.instruction_result = $crate::InstructionResult::StackUnderflow;
            return $($ret)?;
        };
    };
}

/// Pushes a `U256` value onto the stack. Fails the instruction if the stack
/// is full.
#[macro_export]
macro_rules! push {
    ($interp:expr, $x:expr $(,$ret:expr)?) => {
        if !$interp.stack.push($x) {
            $interp.instruction_result = $crate::InstructionResult::StackOverflow;
            return $($ret)?;
        }
    };
}

/// Fails the instruction with `FatalExternalError` when the host returns
/// `None` (database failure), otherwise evaluates to the inner value.
#[macro_export]
macro_rules! host_or_fail {
    ($interp:expr, $e:expr $(,$ret:expr)?) => {
        match $e {
            Some(value) => value,
            None => {
                $interp.instruction_result = $crate::InstructionResult::FatalExternalError;
                return $($ret)?;
            }
        }
    };
}

/// Converts a `U256` value to a `u64`, saturating to `MAX` if the value is
/// too large.
#[macro_export]
macro_rules! as_u64_saturated {
    ($v:expr) => {
        match $v.as_limbs() {
            x => {
                if (x[1] == 0) & (x[2] == 0) & (x[3] == 0) {
                    x[0]
                } else {
                    u64::MAX
                }
            }
        }
    };
}

/// Converts a `U256` value to a `usize`, saturating to `MAX` if the value is
/// too large.
#[macro_export]
macro_rules! as_usize_saturated {
    ($v:expr) => {
        usize::try_from($crate::as_u64_saturated!($v)).unwrap_or(usize::MAX)
    };
}

/// Converts a `U256` value to a `usize`, failing the instruction with
/// `InvalidOperandOOG` if the value does not fit.
#[macro_export]
macro_rules! as_usize_or_fail {
    ($interp:expr, $v:expr) => {
        $crate::as_usize_or_fail_ret!($interp, $v, ())
    };
}

/// Converts a `U256` value to a `usize` and returns `ret` on failure.
#[macro_export]
macro_rules! as_usize_or_fail_ret {
    ($interp:expr, $v:expr, $ret:expr) => {
        match $v.as_limbs() {
            x => {
                if (x[0] > usize::MAX as u64) | (x[1] != 0) | (x[2] != 0) | (x[3] != 0) {
                    $interp.instruction_result = $crate::InstructionResult::InvalidOperandOOG;
                    return $ret;
                }
                x[0] as usize
            }
        }
    };
}
