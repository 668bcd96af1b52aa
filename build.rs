use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

// Must agree with `ll::limb::BITS`.
const LIMB_BITS: u32 = 26;

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("bases_table.rs");
    let mut f = File::create(&dest_path).expect("cannot create bases table");

    gen_bases(&mut f).expect("cannot write bases table");
    println!("cargo:rerun-if-changed=build.rs");
}

fn gen_bases(f: &mut File) -> io::Result<()> {
    // Base '0' and Base '1' don't make any sense, but having
    // entries for them makes the code that uses them simpler.
    f.write_all(b"static BASES : [Base; 37] = [
    /*  0 */ Base { digits_per_limb: 0, big_base: 0 },
    /*  1 */ Base { digits_per_limb: 0, big_base: 0 },\n")?;

    // Alphanumeric digits stop at base 36.
    for i in 2..37 {
        gen_base(f, i)?;
    }

    f.write_all(b"];\n")
}

fn gen_base(f: &mut File, base: u64) -> io::Result<()> {
    let limit = 1u64 << LIMB_BITS;
    let mut digits_per_limb = 0;
    let mut big_base: u64 = 1;
    // Keep multiplying while the chunk value still fits strictly below
    // the limb radix, so a whole chunk of digits is one limb.
    while big_base * base < limit {
        digits_per_limb += 1;
        big_base *= base;
    }

    writeln!(f, "    /* {:2} */ Base {{ digits_per_limb: {}, big_base: 0x{:x} }},",
             base, digits_per_limb, big_base)
}
