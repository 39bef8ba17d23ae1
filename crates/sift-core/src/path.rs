use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Nesting
///
/// How a step reaches its field: through a nested object or through an
/// array. An array step may carry an element index; `None` means
/// "any element".
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Nesting {
    Field,
    List { index: Option<u32> },
}

impl Nesting {
    /// True if this step traverses an array.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::List { .. })
    }
}

///
/// Step
///
/// One field-access step: a field name plus its nesting descriptor.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Step {
    pub name: String,
    pub nesting: Nesting,
}

impl Step {
    /// A plain field step.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nesting: Nesting::Field,
        }
    }

    /// An array step with no element index ("any element").
    #[must_use]
    pub fn list(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nesting: Nesting::List { index: None },
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.nesting {
            Nesting::Field => write!(f, "{}", self.name),
            Nesting::List { index: None } => write!(f, "{}[]", self.name),
            Nesting::List { index: Some(i) } => write!(f, "{}[{i}]", self.name),
        }
    }
}

///
/// Path
///
/// Ordered sequence of steps identifying a field inside a possibly
/// nested/array record schema. Immutable once constructed; two paths are
/// equal iff their step sequences match element-wise (name and nesting
/// kind at every position).
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Step>);

impl Path {
    /// Create a path from an existing step sequence.
    #[must_use]
    pub const fn new(steps: Vec<Step>) -> Self {
        Self(steps)
    }

    /// Single-step convenience for a top-level field.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self(vec![Step::field(name)])
    }

    /// Extend with one more step, returning a new path.
    #[must_use]
    pub fn join(&self, step: Step) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);

        Self(steps)
    }

    /// Return the step sequence.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    /// Return the number of steps.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path has no steps.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Name of the final step, if any.
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(|step| step.name.as_str())
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{step}")?;
        }

        Ok(())
    }
}

///
/// TESTS
///
