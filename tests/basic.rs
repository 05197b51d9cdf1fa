use otter_valid::{
    config::Config,
    engine::QueryEngine,
    manager::TermManager,
    reports::{Interrupt, Report, Validity},
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

mod validity {
    use super::*;

    #[test]
    fn single_variable() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        let p = manager.boolean_variable("p").unwrap();
        assert_eq!(engine.query_validity(&mut manager, p), Ok(Validity::Invalid));
    }

    #[test]
    fn excluded_middle() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        let p = manager.boolean_variable("p").unwrap();
        let not_p = manager.make_not(p).unwrap();
        let p_or_not_p = manager.make_or([p, not_p]).unwrap();

        assert_eq!(
            engine.query_validity(&mut manager, p_or_not_p),
            Ok(Validity::Valid)
        );
    }

    #[test]
    fn contradiction() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        let p = manager.boolean_variable("p").unwrap();
        let not_p = manager.make_not(p).unwrap();
        let p_and_not_p = manager.make_and([p, not_p]).unwrap();

        assert_eq!(
            engine.query_validity(&mut manager, p_and_not_p),
            Ok(Validity::Invalid)
        );

        let solution = engine.check_sat(&mut manager, p_and_not_p).unwrap();
        assert_eq!(solution.report, Report::Unsatisfiable);
        assert!(solution.witness.is_none());
    }

    #[test]
    fn conjunction_elimination() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        let p = manager.boolean_variable("p").unwrap();
        let q = manager.boolean_variable("q").unwrap();
        let p_and_q = manager.make_and([p, q]).unwrap();
        let implication = manager.make_implies(p_and_q, p).unwrap();

        assert_eq!(
            engine.query_validity(&mut manager, implication),
            Ok(Validity::Valid)
        );
    }

    #[test]
    fn peirce() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        // ((p ⇒ q) ⇒ p) ⇒ p
        let p = manager.boolean_variable("p").unwrap();
        let q = manager.boolean_variable("q").unwrap();
        let p_implies_q = manager.make_implies(p, q).unwrap();
        let antecedent = manager.make_implies(p_implies_q, p).unwrap();
        let peirce = manager.make_implies(antecedent, p).unwrap();

        assert_eq!(engine.query_validity(&mut manager, peirce), Ok(Validity::Valid));
    }

    #[test]
    fn equivalence_is_symmetric() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        let p = manager.boolean_variable("p").unwrap();
        let q = manager.boolean_variable("q").unwrap();
        let p_iff_q = manager.make_equiv(p, q).unwrap();
        let q_iff_p = manager.make_equiv(q, p).unwrap();
        let symmetry = manager.make_equiv(p_iff_q, q_iff_p).unwrap();

        assert_eq!(
            engine.query_validity(&mut manager, symmetry),
            Ok(Validity::Valid)
        );
        assert_eq!(
            engine.query_validity(&mut manager, p_iff_q),
            Ok(Validity::Invalid)
        );
    }

    #[test]
    fn constants() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        let top = manager.make_true().unwrap();
        let bot = manager.make_false().unwrap();

        assert_eq!(engine.query_validity(&mut manager, top), Ok(Validity::Valid));
        assert_eq!(engine.query_validity(&mut manager, bot), Ok(Validity::Invalid));
    }
}

mod satisfiability {
    use super::*;

    #[test]
    fn witness_satisfies() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        let [p, q, r] = ["p", "q", "r"].map(|name| manager.boolean_variable(name).unwrap());
        let not_p = manager.make_not(p).unwrap();
        let not_r = manager.make_not(r).unwrap();

        let a = manager.make_or([not_p, q]).unwrap();
        let b = manager.make_implies(q, r).unwrap();
        let c = manager.make_or([p, not_r]).unwrap();
        let d = manager.make_or([p, q, r]).unwrap();
        let formula = manager.make_and([a, b, c, d]).unwrap();

        let solution = engine.check_sat(&mut manager, formula).unwrap();
        assert_eq!(solution.report, Report::Satisfiable);

        let witness = solution.witness.unwrap();
        assert_eq!(manager.evaluate(formula, &witness), Ok(Some(true)));
        assert_eq!(witness.value_of(p), Some(true));
        assert_eq!(witness.value_of(q), Some(true));
        assert_eq!(witness.value_of(r), Some(true));
    }

    #[test]
    fn pigeons() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        // Three pigeons in two holes.
        let mut placed = Vec::new();
        for pigeon in 0..3 {
            let holes = [0, 1].map(|hole| {
                manager
                    .boolean_variable(&format!("p{pigeon}h{hole}"))
                    .unwrap()
            });
            placed.push(holes);
        }

        let mut conjuncts = Vec::new();
        for holes in &placed {
            conjuncts.push(manager.make_or(*holes).unwrap());
        }
        for hole in 0..2 {
            for a in 0..3 {
                for b in (a + 1)..3 {
                    let both = manager.make_and([placed[a][hole], placed[b][hole]]).unwrap();
                    conjuncts.push(manager.make_not(both).unwrap());
                }
            }
        }
        let formula = manager.make_and(conjuncts).unwrap();

        let solution = engine.check_sat(&mut manager, formula).unwrap();
        assert_eq!(solution.report, Report::Unsatisfiable);
        assert!(solution.counters.conflicts > 0);
    }
}

mod limits {
    use std::{sync::atomic::Ordering, time::Duration};

    use otter_valid::structures::term::TermId;

    use super::*;

    /// Inequivalence of each pair of neighbours on a cycle of variables, which is unsatisfiable on a cycle of odd length.
    /// Each conjunct is a disjunction of conjunctions, and so nothing is propagated before some decision.
    fn odd_cycle(manager: &mut TermManager, length: usize) -> TermId {
        let variables = (0..length)
            .map(|index| manager.boolean_variable(&format!("x{index}")).unwrap())
            .collect::<Vec<_>>();
        let mut links = Vec::new();
        for index in 0..length {
            let next = variables[(index + 1) % length];
            let iff = manager.make_equiv(variables[index], next).unwrap();
            links.push(manager.make_not(iff).unwrap());
        }
        manager.make_and(links).unwrap()
    }

    #[test]
    fn decision_limit() {
        init_logs();
        let mut manager = TermManager::default();
        let formula = odd_cycle(&mut manager, 5);

        let mut config = Config::default();
        assert!(config.decision_limit.set(1).is_ok());
        let engine = QueryEngine::from_config(config);

        let solution = engine.check_sat(&mut manager, formula).unwrap();
        assert_eq!(solution.report, Report::Unknown);
        assert_eq!(solution.interrupt, Some(Interrupt::DecisionLimit));
        assert!(solution.witness.is_none());

        let engine = QueryEngine::default();
        let solution = engine.check_sat(&mut manager, formula).unwrap();
        assert_eq!(solution.report, Report::Unsatisfiable);
    }

    /// One more pigeon than holes, with each pigeon in some hole and no two pigeons in the same hole.
    fn pigeons(manager: &mut TermManager, holes: usize) -> TermId {
        let placed = (0..=holes)
            .map(|pigeon| {
                (0..holes)
                    .map(|hole| {
                        manager
                            .boolean_variable(&format!("p{pigeon}h{hole}"))
                            .unwrap()
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let mut conjuncts = Vec::new();
        for in_holes in &placed {
            conjuncts.push(manager.make_or(in_holes.clone()).unwrap());
        }
        for hole in 0..holes {
            for a in 0..=holes {
                for b in (a + 1)..=holes {
                    let both = manager.make_and([placed[a][hole], placed[b][hole]]).unwrap();
                    conjuncts.push(manager.make_not(both).unwrap());
                }
            }
        }
        manager.make_and(conjuncts).unwrap()
    }

    /// Cancels a query on a long search from another thread, after the search has started.
    fn cancel_while_running(parallel_depth: u32) {
        init_logs();
        let mut manager = TermManager::default();
        let formula = pigeons(&mut manager, 11);

        let mut config = Config::default();
        assert!(config.parallel_depth.set(parallel_depth).is_ok());
        // Only as a bound on the test, should cancellation fail.
        assert!(config.time_limit.set(Duration::from_secs(120)).is_ok());
        let engine = QueryEngine::from_config(config);

        let handle = engine.cancel_handle();
        let canceller = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            handle.store(true, Ordering::Relaxed);
        });

        let solution = engine.check_sat(&mut manager, formula).unwrap();
        assert!(canceller.join().is_ok());

        assert_eq!(solution.report, Report::Unknown);
        assert_eq!(solution.interrupt, Some(Interrupt::Cancelled));
        assert!(solution.witness.is_none());
        assert!(solution.counters.decisions > 0);
        assert!(solution.counters.time < Duration::from_secs(120));
    }

    #[test]
    fn cancelled_while_running() {
        cancel_while_running(0);
    }

    #[test]
    fn cancelled_while_running_in_parallel() {
        cancel_while_running(2);
    }

    #[test]
    fn cancelled() {
        init_logs();
        let mut manager = TermManager::default();
        let formula = odd_cycle(&mut manager, 3);
        let engine = QueryEngine::default();

        let handle = engine.cancel_handle();
        handle.store(true, Ordering::Relaxed);

        assert_eq!(
            engine.query_validity(&mut manager, formula),
            Ok(Validity::Unknown)
        );

        engine.reset_cancel();
        assert!(!handle.load(Ordering::Relaxed));

        let not_formula = manager.make_not(formula).unwrap();
        assert_eq!(
            engine.query_validity(&mut manager, not_formula),
            Ok(Validity::Valid)
        );
    }
}

mod depth {
    use otter_valid::structures::term::TermId;

    use super::*;

    const LENGTH: usize = 100_000;

    /// A left-nested conjunction of `length` conjunctions, over the given variables in turn.
    fn chain(manager: &mut TermManager, variables: &[TermId], length: usize) -> TermId {
        let mut chain = variables[0];
        for index in 1..=length {
            chain = manager
                .make_and([chain, variables[index % variables.len()]])
                .unwrap();
        }
        chain
    }

    fn variables(manager: &mut TermManager, count: usize) -> Vec<TermId> {
        (0..count)
            .map(|index| manager.boolean_variable(&format!("p{index}")).unwrap())
            .collect()
    }

    #[test]
    fn long_chain_over_few_variables() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        let atoms = variables(&mut manager, 4);
        let formula = chain(&mut manager, &atoms, LENGTH);

        let (validity, solution) = engine.query(&mut manager, formula).unwrap();
        assert_eq!(validity, Validity::Invalid);
        let counterexample = solution.witness.unwrap();
        assert_eq!(manager.evaluate(formula, &counterexample), Ok(Some(false)));

        let solution = engine.check_sat(&mut manager, formula).unwrap();
        assert_eq!(solution.report, Report::Satisfiable);
        let witness = solution.witness.unwrap();
        assert_eq!(manager.evaluate(formula, &witness), Ok(Some(true)));

        let displayed = manager.display(formula).to_string();
        assert_eq!(displayed.matches("(and ").count(), LENGTH);
    }

    #[test]
    fn long_chain_over_distinct_variables() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        let atoms = variables(&mut manager, LENGTH + 1);
        let formula = chain(&mut manager, &atoms, LENGTH);

        // Each variable is a conjunct, and so is propagated.
        let solution = engine.check_sat(&mut manager, formula).unwrap();
        assert_eq!(solution.report, Report::Satisfiable);
        assert_eq!(solution.counters.decisions, 0);
        assert_eq!(solution.counters.propagations, LENGTH + 1);
        let witness = solution.witness.unwrap();
        assert!(atoms.iter().all(|atom| witness.value_of(*atom) == Some(true)));
    }

    #[test]
    fn many_decisions() {
        init_logs();
        let mut manager = TermManager::default();
        let engine = QueryEngine::default();

        let atoms = variables(&mut manager, 1000);
        let formula = chain(&mut manager, &atoms, 999);

        // The negation is a disjunction of negations, and each but the last is decided.
        let (validity, solution) = engine.query(&mut manager, formula).unwrap();
        assert_eq!(validity, Validity::Invalid);
        assert_eq!(solution.counters.decisions, 999);
        assert_eq!(solution.counters.conflicts, 0);

        let counterexample = solution.witness.unwrap();
        assert_eq!(counterexample.value_of(atoms[999]), Some(false));
        assert_eq!(manager.evaluate(formula, &counterexample), Ok(Some(false)));
    }
}
