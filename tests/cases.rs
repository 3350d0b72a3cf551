use bad_horse::{parse_cases, render, solve_cases, Colour, Error, Format, Graph};

#[test]
fn sample_input_gives_yes_then_no() {
    let text = "2
1
Dead_Bowie Fake_Abe_Lincoln
3
Dead_Bowie Fake_Thomas_Jefferson
Fake_Thomas_Jefferson Fury_Leika
Fury_Leika Dead_Bowie
";
    let verdicts = solve_cases(&parse_cases(text).unwrap()).unwrap();
    let output = render(&verdicts, Format::Text, false).unwrap();
    assert_eq!(output, "Case #1: Yes\nCase #2: No");
}

#[test]
fn every_enmity_crosses_factions() {
    let mut graph = Graph::new();
    let pairs = [
        ("Lex", "Clark"),
        ("Clark", "Zod"),
        ("Zod", "Jor_El"),
        ("Jor_El", "Lex"),
        ("Brainiac", "Kara"),
    ];
    for (a, b) in pairs {
        graph.add_pairing(a, b).unwrap();
    }
    assert_eq!(graph.node_count(), 6);
    assert!(graph.solve());

    for (a, b) in pairs {
        let a = graph.lookup(a).unwrap();
        let b = graph.lookup(b).unwrap();
        assert!(a.is_enemy_of(&b));
        assert_ne!(a.colour(), Colour::None);
        assert_ne!(a.colour(), b.colour());
    }

    let factions = graph.factions().unwrap();
    assert_eq!(factions.red.len() + factions.black.len(), 6);
}

#[test]
fn odd_cycles_of_any_length_fail() {
    for len in [3usize, 5, 7, 101] {
        let mut graph = Graph::new();
        for i in 0..len {
            let (a, b) = (format!("p{}", i), format!("p{}", (i + 1) % len));
            graph.add_pairing(&a, &b).unwrap();
        }
        assert!(!graph.solve(), "cycle of length {}", len);
    }
}

#[test]
fn even_cycles_solve() {
    for len in [4usize, 6, 100] {
        let mut graph = Graph::new();
        for i in 0..len {
            let (a, b) = (format!("p{}", i), format!("p{}", (i + 1) % len));
            graph.add_pairing(&a, &b).unwrap();
        }
        assert!(graph.solve(), "cycle of length {}", len);
    }
}

#[test]
fn unknown_names_are_not_created_by_lookup() {
    let mut graph = Graph::new();
    graph.add_pairing("A", "B").unwrap();
    assert!(matches!(graph.lookup("C"), Err(Error::NotFound { .. })));
    assert_eq!(graph.node_count(), 2);
}
