use std::fmt;

/// The role a leaf node plays in a computation.
///
/// Roles are labels for diagnostics (DOT export, debug output, parameter
/// bookkeeping); the engine never branches on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Plain value created without a specific role.
    Value,
    /// An element of an input vector fed to a model.
    Input,
    /// An element of a target vector in a loss.
    Target,
    /// A trainable weight.
    Weight,
    /// A trainable bias.
    Bias,
    /// A literal constant (e.g. the `2` in `2 * x`).
    Constant,
}

impl Role {
    /// Weights and biases are the trainable leaves.
    pub fn is_parameter(&self) -> bool {
        matches!(self, Role::Weight | Role::Bias)
    }
}

/// The differentiable operations of the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    /// Power with a constant real exponent.
    Pow(f64),
    Relu,
}

/// Label identifying the producing operation or the leaf role of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tag {
    Leaf(Role),
    Op(Op),
}

impl Tag {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tag::Leaf(_))
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, Tag::Leaf(role) if role.is_parameter())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Value => "value",
            Role::Input => "input",
            Role::Target => "target",
            Role::Weight => "weight",
            Role::Bias => "bias",
            Role::Constant => "constant",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Add => f.write_str("+"),
            Op::Sub => f.write_str("-"),
            Op::Mul => f.write_str("*"),
            Op::Div => f.write_str("/"),
            Op::Pow(n) => write!(f, "^{}", n),
            Op::Relu => f.write_str("relu"),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Leaf(role) => role.fmt(f),
            Tag::Op(op) => op.fmt(f),
        }
    }
}
