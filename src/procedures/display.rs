/*!
Display of terms in prefix notation.

- A variable is displayed by name, and a constant as `true` or `false`.
- An operator is displayed as a parenthesised list of the [symbol](crate::structures::term::Kind::symbol) of the operator followed by each operand.
- An id not issued by the database is displayed as the id, prefixed with `?`.

Display walks the whole of a term, and so a term with much sharing may be displayed with much repetition.
*/

use crate::{
    db::term::TermDB,
    structures::term::{Term, TermId},
};

/// A term, paired with the database the term is stored in, for display.
pub struct TermDisplay<'db> {
    terms: &'db TermDB,
    root: TermId,
}

impl<'db> TermDisplay<'db> {
    pub fn new(terms: &'db TermDB, root: TermId) -> Self {
        TermDisplay { terms, root }
    }
}

/// A step of a display, taken from a stack.
enum Step {
    Term(TermId),
    Space,
    Close,
}

impl std::fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut steps = vec![Step::Term(self.root)];

        while let Some(step) = steps.pop() {
            match step {
                Step::Space => write!(f, " ")?,

                Step::Close => write!(f, ")")?,

                Step::Term(id) => match self.terms.get(id) {
                    Err(_) => write!(f, "?{id}")?,

                    Ok(Term::Variable { name, .. }) => write!(f, "{name}")?,

                    Ok(Term::Constant { value, .. }) => write!(f, "{value}")?,

                    Ok(Term::Operator { kind, operands }) => {
                        write!(f, "({kind}")?;
                        steps.push(Step::Close);
                        for operand in operands.iter().rev() {
                            steps.push(Step::Term(*operand));
                            steps.push(Step::Space);
                        }
                    }
                },
            }
        }

        Ok(())
    }
}
