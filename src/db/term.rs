/*!
A database of terms, which stores at most one instance of each term.

# Overview

Terms are stored in a vector, and the index of a term in the vector is the [id](TermId) of the term.
Alongside, a map from terms to ids is kept, so that on a request to [intern](TermDB::intern) some term:
- If an equal term has been stored, the id of the stored term is returned.
- Otherwise, the term is stored with the next id, and that id is returned.

As a consequence:
- Ids are issued in strictly increasing order and are never reused, as terms are never removed.
- Two ids are equal *if and only if* the terms the ids refer to are equal.
- The operands of an operator always have a lower id than the operator, so the terms form a directed acyclic graph, and a traversal of the graph may visit shared subterms once by keeping note of the ids visited.

Terms are only ever added to the database, and so any number of readers may share a database, e.g. across the threads of a parallel [search](crate::procedures::search).

# Building terms

Every term is interned through the [builder](crate::builder), which checks the sort of a variable or constant, and the sorts of the operands of an operator, before interning.
*/

use std::collections::{HashMap, HashSet};

use crate::{
    misc::log::targets::{self},
    structures::{
        sort::Sort,
        term::{Kind, Term, TermId},
    },
    types::err::TermDBError,
};

/// The term database.
#[derive(Default)]
pub struct TermDB {
    /// Each term, indexed by id.
    terms: Vec<Term>,

    /// A map from terms to ids.
    index: HashMap<Term, TermId>,
}

impl TermDB {
    /// The id of `term`, storing the term if no equal term has been stored.
    ///
    /// Sorts are not checked, though the operands of an operator are required to be in the database.
    pub(crate) fn intern(&mut self, term: Term) -> Result<TermId, TermDBError> {
        if let Some(id) = self.index.get(&term) {
            return Ok(*id);
        }

        for operand in term.operands() {
            if !self.contains(*operand) {
                log::error!(target: targets::TERM_DB, "Operand {operand} is not in the database");
                return Err(TermDBError::UnknownTerm(*operand));
            }
        }

        let id = match self.terms.len().try_into() {
            Ok(index) => TermId(index),
            Err(_) => return Err(TermDBError::TermsExhausted),
        };

        log::trace!(target: targets::TERM_DB, "Interned {id}: {term:?}");
        self.terms.push(term.clone());
        self.index.insert(term, id);

        Ok(id)
    }

    /// The id of the variable with the given name and sort, storing the variable if needed.
    ///
    /// For the life of the database, the same name and sort always give the same id.
    ///
    /// The sort is not checked, and so variables are made through [make_variable](crate::manager::TermManager::make_variable) outside of the crate.
    pub(crate) fn lookup_variable(&mut self, name: &str, sort: Sort) -> Result<TermId, TermDBError> {
        self.intern(Term::Variable {
            name: name.to_string(),
            sort,
        })
    }

    /// The id of `term`, if the term has been stored.
    pub fn find(&self, term: &Term) -> Option<TermId> {
        self.index.get(term).copied()
    }

    /// The term with the given id.
    pub fn get(&self, id: TermId) -> Result<&Term, TermDBError> {
        match self.terms.get(id.index()) {
            Some(term) => Ok(term),
            None => Err(TermDBError::UnknownTerm(id)),
        }
    }

    /// The term with the given id.
    ///
    /// # Safety
    /// No check is made on whether the id was issued by the database.
    pub unsafe fn get_unchecked(&self, id: TermId) -> &Term {
        unsafe { self.terms.get_unchecked(id.index()) }
    }

    pub fn sort_of(&self, id: TermId) -> Result<Sort, TermDBError> {
        Ok(self.get(id)?.sort())
    }

    /// True if the id was issued by the database, false otherwise.
    pub fn contains(&self, id: TermId) -> bool {
        id.index() < self.terms.len()
    }

    /// A count of terms in the database.
    pub fn count(&self) -> usize {
        self.terms.len()
    }

    /// An iterator over all (id, term) pairs, in order of id.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, &Term)> {
        self.terms
            .iter()
            .enumerate()
            .map(|(index, term)| (TermId(index as u32), term))
    }

    /// The variables of `root`, in order of first occurrence on a pre-order traversal from `root`.
    pub fn variables(&self, root: TermId) -> Result<Vec<TermId>, TermDBError> {
        self.get(root)?;

        let mut variables = Vec::default();
        let mut seen = HashSet::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            // Safe, as the root is checked and operands are in the database by interning.
            match unsafe { self.get_unchecked(id) } {
                Term::Variable { .. } => variables.push(id),
                Term::Constant { .. } => {}
                Term::Operator { operands, .. } => stack.extend(operands.iter().rev()),
            }
        }

        Ok(variables)
    }

    /// The conjuncts of `root`, found by descending through conjunctions from `root`, in order of first occurrence.
    ///
    /// If `root` is not a conjunction, `root` is the only conjunct.
    pub fn conjuncts(&self, root: TermId) -> Result<Vec<TermId>, TermDBError> {
        self.get(root)?;

        let mut conjuncts = Vec::default();
        let mut seen = HashSet::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            match unsafe { self.get_unchecked(id) } {
                Term::Operator {
                    kind: Kind::And,
                    operands,
                } => stack.extend(operands.iter().rev()),
                _ => conjuncts.push(id),
            }
        }

        Ok(conjuncts)
    }
}

#[cfg(test)]
mod term_db_tests {
    use super::*;

    #[test]
    fn variables_are_shared() {
        let mut term_db = TermDB::default();

        let p = term_db.lookup_variable("p", Sort::BOOLEAN).unwrap();
        let q = term_db.lookup_variable("q", Sort::BOOLEAN).unwrap();
        let p_again = term_db.lookup_variable("p", Sort::BOOLEAN).unwrap();

        assert_eq!(p, p_again);
        assert_ne!(p, q);
        assert_eq!(term_db.count(), 2);
    }

    #[test]
    fn sort_distinguishes_variables() {
        let mut term_db = TermDB::default();

        let p_bool = term_db.lookup_variable("p", Sort::BOOLEAN).unwrap();
        let p_other = term_db.lookup_variable("p", Sort(1)).unwrap();

        assert_ne!(p_bool, p_other);
        assert_eq!(term_db.sort_of(p_other), Ok(Sort(1)));
    }

    #[test]
    fn ids_increase() {
        let mut term_db = TermDB::default();

        let p = term_db.lookup_variable("p", Sort::BOOLEAN).unwrap();
        let not_p = term_db
            .intern(Term::Operator {
                kind: Kind::Not,
                operands: vec![p],
            })
            .unwrap();
        let top = term_db
            .intern(Term::Constant {
                value: true,
                sort: Sort::BOOLEAN,
            })
            .unwrap();

        assert!(p < not_p);
        assert!(not_p < top);

        let not_p_again = term_db
            .intern(Term::Operator {
                kind: Kind::Not,
                operands: vec![p],
            })
            .unwrap();
        assert_eq!(not_p, not_p_again);
        assert_eq!(term_db.count(), 3);
    }

    #[test]
    fn unknown_operand() {
        let mut term_db = TermDB::default();

        let dangling = Term::Operator {
            kind: Kind::Not,
            operands: vec![TermId(7)],
        };
        assert_eq!(
            term_db.intern(dangling),
            Err(TermDBError::UnknownTerm(TermId(7)))
        );
        assert_eq!(term_db.count(), 0);
        assert!(term_db.get(TermId(0)).is_err());
    }

    #[test]
    fn pre_order_variables() {
        let mut term_db = TermDB::default();

        let p = term_db.lookup_variable("p", Sort::BOOLEAN).unwrap();
        let q = term_db.lookup_variable("q", Sort::BOOLEAN).unwrap();
        let r = term_db.lookup_variable("r", Sort::BOOLEAN).unwrap();

        let q_or_p = term_db
            .intern(Term::Operator {
                kind: Kind::Or,
                operands: vec![q, p],
            })
            .unwrap();
        let and = term_db
            .intern(Term::Operator {
                kind: Kind::And,
                operands: vec![r, q_or_p, p],
            })
            .unwrap();

        assert_eq!(term_db.variables(and), Ok(vec![r, q, p]));
        assert_eq!(term_db.conjuncts(and), Ok(vec![r, q_or_p, p]));
        assert_eq!(term_db.conjuncts(q_or_p), Ok(vec![q_or_p]));
    }
}
