use std::{
    env::var,
    fs::{read_to_string, write},
    path::Path,
};

fn main() {
    println!("cargo:rerun-if-changed=src/template.rs");

    let out_dir = var("OUT_DIR").unwrap();
    let out_file = Path::new(&out_dir).join("board.rs");

    let input = read_to_string("src/template.rs").unwrap();
    let (template, _dummy_params) = input.split_once("// $end_template").unwrap();

    let mut result = String::new();

    result += "macro_rules! board {
    ($mod:ident => $export:ident) => {
        pub use $mod::Board as $export;
        pub mod $mod {";

    result += template;

    result += "
    use crate::params::$mod::*;";

    result += "
        }
    };
}";

    write(out_file, result).unwrap();
}
