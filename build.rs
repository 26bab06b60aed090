extern crate gen_tables;

fn main() {
    // rerun, and so regenerate, only when the generator changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=gen_tables/src");

    // (re)write hand rank and board tables into OUT_DIR
    gen_tables::gen_tables();
}
