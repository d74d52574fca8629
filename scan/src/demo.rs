// demo.rs

/// Built-in demonstration programs, runnable with `--demo`.
pub const PROGRAMS: &[&str] = &[
    "start\n var x  int ;\n read x ;\n print x ;\n finish",
    " start\n var LongIdentifierThatExceedsTheEightCharacterLimit  int ;\n read LongIdentifierThatExceedsTheEightCharacterLimit;\n print LongIdentifierThatExceedsTheEightCharacterLimit;\n finish",
    "start\n if ( x == 123456789 )\n then {\n print x ;\n }\n finish",
    "start\n if ( x = = 5 )\n then {\n  print x ;\n  }\n  finish",
    "start\n var n , m , add : int ;\n read n , m ;\n add = n + m ;\n print add ;\n finish",
    "start\n var n , m , subtract : int ;\n read n , m ;\n subtract = n - m ;\n print subtract ;\n finish",
    "start\n var n , m, multiply : int ;\n read n , m ;\n multiply = n * m ;\n print multiply ;\n finish",
    "start\n if ( a = 5 )\n then {\n print a ;\n }\n finish ",
];
