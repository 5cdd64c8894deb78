/*!
# Instructions
*/

#[path = "instructions/add.rs"]
#[allow(non_snake_case)]
pub mod ADD;

#[path = "instructions/div.rs"]
#[allow(non_snake_case)]
pub mod DIV;

#[path = "instructions/empty.rs"]
#[allow(non_snake_case)]
pub mod EMPTY;

#[path = "instructions/goto.rs"]
#[allow(non_snake_case)]
pub mod GOTO;

#[path = "instructions/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "instructions/keep.rs"]
#[allow(non_snake_case)]
pub mod K_VARIANTS;

#[path = "instructions/modulo.rs"]
#[allow(non_snake_case)]
pub mod MOD;

#[path = "instructions/mul.rs"]
#[allow(non_snake_case)]
pub mod MUL;

#[path = "instructions/peek.rs"]
#[allow(non_snake_case)]
pub mod PEEK;

#[path = "instructions/poke.rs"]
#[allow(non_snake_case)]
pub mod POKE;

#[path = "instructions/pop.rs"]
#[allow(non_snake_case)]
pub mod POP;

#[path = "instructions/popall.rs"]
#[allow(non_snake_case)]
pub mod POPALL;

#[path = "instructions/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "instructions/push.rs"]
#[allow(non_snake_case)]
pub mod PUSH;

#[path = "instructions/qdisplay.rs"]
#[allow(non_snake_case)]
pub mod QDISPLAY;

#[path = "instructions/read.rs"]
#[allow(non_snake_case)]
pub mod READ;

#[path = "instructions/ret.rs"]
#[allow(non_snake_case)]
pub mod RET;

#[path = "instructions/sort.rs"]
#[allow(non_snake_case)]
pub mod SORT;

#[path = "instructions/sub.rs"]
#[allow(non_snake_case)]
pub mod SUB;
