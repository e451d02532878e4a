use regex_afd_rs::{
    CapacityError, Config, Dfa, Limits, ParseError, RegexError, Rejection, Shell, Verdict,
};

fn session(input: &str) -> String {
    let mut output = Vec::new();
    Shell::new(input.as_bytes(), &mut output, Config::default())
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn union_language() {
    let dfa = Dfa::new("a|b").unwrap();

    assert_eq!(dfa.validate("a"), Verdict::Accepted);
    assert_eq!(dfa.validate("b"), Verdict::Accepted);
    assert!(!dfa.is_match("ab"));
    assert!(!dfa.is_match(""));
    assert_eq!(
        dfa.validate("c"),
        Verdict::Rejected(Rejection::OutOfAlphabet { ch: 'c', position: 1 })
    );
}

#[test]
fn suffix_language() {
    let dfa = Dfa::new("(a|b)*abb").unwrap();

    for input in ["abb", "aabb", "babb", "ababb"] {
        assert!(dfa.is_match(input), "{input}");
    }
    for input in ["ab", "a", "abbb", "bba"] {
        assert!(!dfa.is_match(input), "{input}");
    }
    assert_eq!(
        dfa.validate("ab"),
        Verdict::Rejected(Rejection::NotAccepting { ch: 'b', position: 2 })
    );
}

#[test]
fn digits_and_upper_case() {
    let dfa = Dfa::new("(0|1)*1Z").unwrap();

    assert!(dfa.is_match("1Z"));
    assert!(dfa.is_match("0101Z"));
    assert!(!dfa.is_match("10Z"));
    assert!(!dfa.is_match("1z"));
}

#[test]
fn malformed_expressions() {
    assert_eq!(
        Dfa::new("(a|b").unwrap_err(),
        RegexError::Parse(ParseError::UnclosedGroup { position: 1 })
    );
    assert_eq!(
        Dfa::new("a.b").unwrap_err(),
        RegexError::Parse(ParseError::InvalidCharacter { ch: '.', position: 2 })
    );
    assert_eq!(
        Dfa::new("a#").unwrap_err(),
        RegexError::Parse(ParseError::ReservedSymbol { position: 2 })
    );
}

#[test]
fn capacity() {
    let limits = Limits {
        max_alphabet: 2,
        ..Limits::default()
    };

    assert!(Dfa::with_limits("(a|b)*", &limits).is_ok());
    assert_eq!(
        Dfa::with_limits("abc", &limits).unwrap_err(),
        RegexError::Capacity(CapacityError::AlphabetTooLarge { limit: 2 })
    );
}

#[test]
fn transcript() {
    let output = session("a|b\na\nc\nab\n\n");
    let expect = "Ingrese una expresion regular: \n\
                  [AFD construido. Modo validacion activo.]\n\
                  Ingrese cadena: Cadena ACEPTADA.\n\
                  \n\
                  Ingrese cadena: Cadena RECHAZADA: caracter 'c' fuera del alfabeto en posicion 1\n\
                  \n\
                  Ingrese cadena: Cadena RECHAZADA en el caracter 2 ('b')\n\
                  \n\
                  Ingrese cadena: [ENTER]\n\
                  Programa terminado.\n";

    assert_eq!(output, expect);
}

#[test]
fn transcript_missing_final_transition() {
    let output = session("(a|b)*abb\nab\n");

    assert!(output.contains(
        "Ingrese cadena: Cadena RECHAZADA: Falta transicion en el caracter 2 (finaliza con 'b').\n\n"
    ));
    // end of input ends the loop like an empty line
    assert!(output.ends_with("Ingrese cadena: [ENTER]\nPrograma terminado.\n"));
}

#[test]
fn transcript_parse_error_reprompts() {
    let output = session("(a|b\na*\n\n");
    let expect = "Ingrese una expresion regular: \
                  Error de sintaxis: parentesis '(' sin cerrar en la posicion 1\n\
                  \n\
                  Ingrese una expresion regular: \n\
                  [AFD construido. Modo validacion activo.]\n\
                  Ingrese cadena: [ENTER]\n\
                  Programa terminado.\n";

    assert_eq!(output, expect);
}
