use otter_valid::{
    config::Config,
    engine::QueryEngine,
    manager::TermManager,
    reports::{Report, Validity},
    structures::{
        assignment::Assignment,
        term::{Kind, TermId},
    },
};

use rand::{rngs::StdRng, Rng, SeedableRng};

const SEED: u64 = 0x6f74746572;
const ROUNDS: usize = 64;

/// The shape of a formula, independent of any manager.
#[derive(Clone, Debug)]
enum Shape {
    Atom(usize),
    Constant(bool),
    Operator(Kind, Vec<Shape>),
}

fn random_shape(rng: &mut StdRng, atoms: usize, depth: usize) -> Shape {
    if depth == 0 || rng.random_bool(0.2) {
        return match rng.random_bool(0.9) {
            true => Shape::Atom(rng.random_range(0..atoms)),
            false => Shape::Constant(rng.random_bool(0.5)),
        };
    }

    match rng.random_range(0..5) {
        0 => Shape::Operator(Kind::Not, vec![random_shape(rng, atoms, depth - 1)]),
        1 | 2 => {
            let kind = match rng.random_bool(0.5) {
                true => Kind::And,
                false => Kind::Or,
            };
            let width = rng.random_range(2..4);
            let operands = (0..width)
                .map(|_| random_shape(rng, atoms, depth - 1))
                .collect();
            Shape::Operator(kind, operands)
        }
        3 => Shape::Operator(
            Kind::Implies,
            vec![
                random_shape(rng, atoms, depth - 1),
                random_shape(rng, atoms, depth - 1),
            ],
        ),
        _ => Shape::Operator(
            Kind::Equiv,
            vec![
                random_shape(rng, atoms, depth - 1),
                random_shape(rng, atoms, depth - 1),
            ],
        ),
    }
}

fn build(manager: &mut TermManager, shape: &Shape, atoms: &[TermId]) -> TermId {
    match shape {
        Shape::Atom(index) => atoms[*index],
        Shape::Constant(value) => match value {
            true => manager.make_true().unwrap(),
            false => manager.make_false().unwrap(),
        },
        Shape::Operator(kind, operands) => {
            let operands = operands
                .iter()
                .map(|operand| build(manager, operand, atoms))
                .collect::<Vec<_>>();
            manager.make_operator(*kind, operands).unwrap()
        }
    }
}

fn atoms_named(manager: &mut TermManager, prefix: &str, count: usize) -> Vec<TermId> {
    (0..count)
        .map(|index| manager.boolean_variable(&format!("{prefix}{index}")).unwrap())
        .collect()
}

/// The values of `formula` on each full assignment to `atoms`.
fn truth_table(manager: &TermManager, formula: TermId, atoms: &[TermId]) -> Vec<bool> {
    (0..(1_usize << atoms.len()))
        .map(|bits| {
            let assignment = atoms
                .iter()
                .enumerate()
                .map(|(index, atom)| (*atom, bits & (1 << index) != 0))
                .collect::<Assignment>();
            manager.evaluate(formula, &assignment).unwrap().unwrap()
        })
        .collect()
}

#[test]
fn agrees_with_truth_tables() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(SEED);
    let engine = QueryEngine::default();

    for _ in 0..ROUNDS {
        let mut manager = TermManager::default();
        let atoms = atoms_named(&mut manager, "p", 4);
        let shape = random_shape(&mut rng, atoms.len(), 4);
        let formula = build(&mut manager, &shape, &atoms);

        let table = truth_table(&manager, formula, &atoms);
        let expected_validity = match table.iter().all(|value| *value) {
            true => Validity::Valid,
            false => Validity::Invalid,
        };
        let expected_report = match table.iter().any(|value| *value) {
            true => Report::Satisfiable,
            false => Report::Unsatisfiable,
        };

        assert_eq!(
            engine.query_validity(&mut manager, formula),
            Ok(expected_validity),
            "{shape:?}"
        );

        let solution = engine.check_sat(&mut manager, formula).unwrap();
        assert_eq!(solution.report, expected_report, "{shape:?}");
        if let Some(witness) = solution.witness {
            assert_eq!(manager.evaluate(formula, &witness), Ok(Some(true)));
        }
    }
}

#[test]
fn duality() {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    let engine = QueryEngine::default();

    for _ in 0..ROUNDS {
        let mut manager = TermManager::default();
        let atoms = atoms_named(&mut manager, "p", 3);
        let shape = random_shape(&mut rng, atoms.len(), 3);
        let formula = build(&mut manager, &shape, &atoms);
        let negation = manager.make_not(formula).unwrap();

        let validity = engine.query_validity(&mut manager, formula).unwrap();
        let report = engine.check_sat(&mut manager, negation).unwrap().report;
        assert_eq!(validity, Validity::of_negation(report));

        // A formula and the negation of the formula are not both valid.
        let negation_validity = engine.query_validity(&mut manager, negation).unwrap();
        assert!(!(validity == Validity::Valid && negation_validity == Validity::Valid));
    }
}

#[test]
fn alpha_equivalence() {
    let mut rng = StdRng::seed_from_u64(SEED + 2);
    let engine = QueryEngine::default();

    for _ in 0..ROUNDS {
        let mut manager = TermManager::default();
        let p_atoms = atoms_named(&mut manager, "p", 3);
        let q_atoms = atoms_named(&mut manager, "q", 3);

        let shape = random_shape(&mut rng, 3, 4);
        let over_p = build(&mut manager, &shape, &p_atoms);
        let over_q = build(&mut manager, &shape, &q_atoms);

        assert_eq!(
            engine.query_validity(&mut manager, over_p),
            engine.query_validity(&mut manager, over_q)
        );
    }
}

#[test]
fn conjunction_of_valid_formulas() {
    let mut rng = StdRng::seed_from_u64(SEED + 3);
    let engine = QueryEngine::default();

    for _ in 0..ROUNDS {
        let mut manager = TermManager::default();
        let atoms = atoms_named(&mut manager, "p", 3);
        let a = build(&mut manager, &random_shape(&mut rng, 3, 3), &atoms);
        let b = build(&mut manager, &random_shape(&mut rng, 3, 3), &atoms);
        let a_and_b = manager.make_and([a, b]).unwrap();

        let a_valid = engine.query_validity(&mut manager, a) == Ok(Validity::Valid);
        let b_valid = engine.query_validity(&mut manager, b) == Ok(Validity::Valid);
        let both_valid = engine.query_validity(&mut manager, a_and_b) == Ok(Validity::Valid);

        assert_eq!(both_valid, a_valid && b_valid);
    }
}

#[test]
fn interning_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(SEED + 4);

    for _ in 0..ROUNDS {
        let mut manager = TermManager::default();
        let atoms = atoms_named(&mut manager, "p", 4);
        let shape = random_shape(&mut rng, atoms.len(), 5);

        let first = build(&mut manager, &shape, &atoms);
        let count = manager.term_db.count();
        let second = build(&mut manager, &shape, &atoms);

        assert_eq!(first, second);
        assert_eq!(count, manager.term_db.count());
    }
}

#[test]
fn configurations_agree() {
    let mut rng = StdRng::seed_from_u64(SEED + 5);

    let mut engines = Vec::new();
    for parallel_depth in [0, 1, 3] {
        for memoize in [true, false] {
            for propagation in [true, false] {
                let mut config = Config::default();
                assert!(config.parallel_depth.set(parallel_depth).is_ok());
                config.memoize.value = memoize;
                config.propagation.value = propagation;
                engines.push(QueryEngine::from_config(config));
            }
        }
    }

    for _ in 0..ROUNDS / 2 {
        let mut manager = TermManager::default();
        let atoms = atoms_named(&mut manager, "p", 5);
        let shape = random_shape(&mut rng, atoms.len(), 4);
        let formula = build(&mut manager, &shape, &atoms);

        let mut reports = Vec::new();
        for engine in &engines {
            let solution = engine.check_sat(&mut manager, formula).unwrap();
            if let Some(witness) = &solution.witness {
                assert_eq!(manager.evaluate(formula, witness), Ok(Some(true)));
            }
            reports.push(solution.report);
        }

        assert!(reports.windows(2).all(|pair| pair[0] == pair[1]), "{shape:?}");
    }
}

#[test]
fn parallel_witness_is_sequential_witness() {
    let mut rng = StdRng::seed_from_u64(SEED + 6);

    let sequential = QueryEngine::default();
    let mut config = Config::default();
    assert!(config.parallel_depth.set(2).is_ok());
    let parallel = QueryEngine::from_config(config);

    for _ in 0..ROUNDS / 2 {
        let mut manager = TermManager::default();
        let atoms = atoms_named(&mut manager, "p", 5);
        let formula = build(&mut manager, &random_shape(&mut rng, atoms.len(), 4), &atoms);

        let sequential_solution = sequential.check_sat(&mut manager, formula).unwrap();
        let parallel_solution = parallel.check_sat(&mut manager, formula).unwrap();

        assert_eq!(sequential_solution.report, parallel_solution.report);
        assert_eq!(sequential_solution.witness, parallel_solution.witness);
    }
}
