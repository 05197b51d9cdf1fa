/*!
Structural rewrites of a formula, applied before a search.

# Overview

Normalisation happens in two steps:

1. [eliminate_connectives](TermManager::eliminate_connectives) rewrites each implication and equivalence:
   - *a* ⇒ *b* as ¬*a* ∨ *b*.
   - *a* ⇔ *b* as (¬*a* ∨ *b*) ∧ (¬*b* ∨ *a*).
2. [negation_normal_form](TermManager::negation_normal_form) pushes each negation through conjunctions and disjunctions, so that only variables are negated:
   - ¬¬*a* as *a*.
   - ¬(*a* ∧ *b*) as ¬*a* ∨ ¬*b*, and dually for disjunctions.
   - ¬*true* as *false*, and dually.

Both steps build terms through the [builder](crate::builder), and so reuse any interned subterm.
Each step keeps a map from terms already rewritten to the result of the rewrite, and so a shared subterm is rewritten once.

The result of [normalise](TermManager::normalise) is equivalent to the given formula, and has the same variables.

# Example

```rust
# use otter_valid::manager::TermManager;
let mut manager = TermManager::default();
let p = manager.boolean_variable("p").unwrap();
let q = manager.boolean_variable("q").unwrap();

let equiv = manager.make_equiv(p, q).unwrap();
let not_equiv = manager.make_not(equiv).unwrap();
let normal = manager.normalise(not_equiv).unwrap();

assert_eq!(
    manager.display(normal).to_string(),
    "(or (and p (not q)) (and q (not p)))"
);
```
*/

use std::collections::HashMap;

use crate::{
    manager::TermManager,
    misc::log::targets::{self},
    structures::term::{Kind, Term, TermId},
    types::err::{self},
};

impl TermManager {
    /// Eliminates implications and equivalences, then pushes negations to variables.
    ///
    /// For details, see [procedures::normalise](crate::procedures::normalise).
    pub fn normalise(&mut self, term: TermId) -> Result<TermId, err::ErrorKind> {
        let eliminated = self.eliminate_connectives(term)?;
        let normal = self.negation_normal_form(eliminated)?;
        log::debug!(target: targets::NORMALISE, "Normalised {term} to {normal}");
        Ok(normal)
    }

    /// Rewrites each implication and equivalence in terms of negation, conjunction, and disjunction.
    pub fn eliminate_connectives(&mut self, term: TermId) -> Result<TermId, err::ErrorKind> {
        let mut rewrites: HashMap<TermId, TermId> = HashMap::new();

        // Each entry is a term paired with whether the operands of the term have been pushed.
        let mut stack = vec![(term, false)];
        while let Some((id, expanded)) = stack.pop() {
            if rewrites.contains_key(&id) {
                continue;
            }

            let (kind, operands) = match self.term_db.get(id)? {
                Term::Variable { .. } | Term::Constant { .. } => {
                    rewrites.insert(id, id);
                    continue;
                }
                Term::Operator { kind, operands } => (*kind, operands.clone()),
            };

            if !expanded {
                stack.push((id, true));
                for operand in operands.iter().rev() {
                    if !rewrites.contains_key(operand) {
                        stack.push((*operand, false));
                    }
                }
                continue;
            }

            let rewritten = operands
                .iter()
                .map(|operand| rewrites.get(operand).copied().unwrap_or(*operand))
                .collect::<Vec<_>>();

            let rewrite = match (kind, rewritten.as_slice()) {
                (Kind::Implies, [a, b]) => {
                    let not_a = self.make_not(*a)?;
                    self.make_or([not_a, *b])?
                }

                (Kind::Equiv, [a, b]) => {
                    let not_a = self.make_not(*a)?;
                    let not_b = self.make_not(*b)?;
                    let forward = self.make_or([not_a, *b])?;
                    let backward = self.make_or([not_b, *a])?;
                    self.make_and([forward, backward])?
                }

                _ => self.make_operator(kind, rewritten)?,
            };

            log::trace!(target: targets::NORMALISE, "Eliminated {id} as {rewrite}");
            rewrites.insert(id, rewrite);
        }

        Ok(rewrites.get(&term).copied().unwrap_or(term))
    }

    /// Pushes each negation through conjunctions and disjunctions, so that only variables are negated.
    ///
    /// Implications and equivalences are rewritten as in [eliminate_connectives](TermManager::eliminate_connectives) along the way.
    pub fn negation_normal_form(&mut self, term: TermId) -> Result<TermId, err::ErrorKind> {
        // Keyed by a term and a polarity, with the negation normal form of the negation of the term on a false polarity.
        let mut rewrites: HashMap<(TermId, bool), TermId> = HashMap::new();

        let mut stack = vec![((term, true), false)];
        while let Some((key, expanded)) = stack.pop() {
            if rewrites.contains_key(&key) {
                continue;
            }
            let (id, polarity) = key;

            let rewrite = match self.term_db.get(id)?.clone() {
                Term::Variable { .. } => match polarity {
                    true => id,
                    false => self.make_not(id)?,
                },

                Term::Constant { value, sort } => self.make_constant(value == polarity, sort)?,

                Term::Operator { kind, operands } if !expanded => {
                    stack.push((key, true));
                    for required in nnf_requirements(kind, &operands, polarity).into_iter().rev() {
                        if !rewrites.contains_key(&required) {
                            stack.push((required, false));
                        }
                    }
                    continue;
                }

                Term::Operator { kind, operands } => {
                    let nnf = |operand: TermId, polarity: bool| {
                        rewrites
                            .get(&(operand, polarity))
                            .copied()
                            .unwrap_or(operand)
                    };

                    match (kind, operands.as_slice()) {
                        (Kind::Not, [a]) => nnf(*a, !polarity),

                        (Kind::And | Kind::Or, _) => {
                            let dual = match (kind, polarity) {
                                (Kind::And, true) | (Kind::Or, false) => Kind::And,
                                _ => Kind::Or,
                            };
                            let rewritten = operands
                                .iter()
                                .map(|operand| nnf(*operand, polarity))
                                .collect::<Vec<_>>();
                            self.make_operator(dual, rewritten)?
                        }

                        (Kind::Implies, [a, b]) => {
                            let a = nnf(*a, !polarity);
                            let b = nnf(*b, polarity);
                            match polarity {
                                true => self.make_or([a, b])?,
                                false => self.make_and([a, b])?,
                            }
                        }

                        (Kind::Equiv, [a, b]) => {
                            // ¬(a ⇔ b) is (a ∧ ¬b) ∨ (b ∧ ¬a).
                            let (pos_a, neg_a) = (nnf(*a, true), nnf(*a, false));
                            let (pos_b, neg_b) = (nnf(*b, true), nnf(*b, false));
                            match polarity {
                                true => {
                                    let forward = self.make_or([neg_a, pos_b])?;
                                    let backward = self.make_or([neg_b, pos_a])?;
                                    self.make_and([forward, backward])?
                                }
                                false => {
                                    let left = self.make_and([pos_a, neg_b])?;
                                    let right = self.make_and([pos_b, neg_a])?;
                                    self.make_or([left, right])?
                                }
                            }
                        }

                        // Unreachable for terms from the builder, and left as is otherwise.
                        _ => id,
                    }
                }
            };

            rewrites.insert(key, rewrite);
        }

        Ok(rewrites.get(&(term, true)).copied().unwrap_or(term))
    }
}

/// The operands, each paired with a polarity, whose negation normal forms are needed for the negation normal form of an operator.
fn nnf_requirements(kind: Kind, operands: &[TermId], polarity: bool) -> Vec<(TermId, bool)> {
    match (kind, operands) {
        (Kind::Not, [a]) => vec![(*a, !polarity)],

        (Kind::And | Kind::Or, _) => operands.iter().map(|operand| (*operand, polarity)).collect(),

        (Kind::Implies, [a, b]) => vec![(*a, !polarity), (*b, polarity)],

        (Kind::Equiv, [a, b]) => vec![(*a, true), (*a, false), (*b, true), (*b, false)],

        _ => Vec::default(),
    }
}
