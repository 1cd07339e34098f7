// demos/showcase.rs
use endian_swap::*;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    registry().with(filter).with(fmt::layer().with_writer(std::io::stderr)).init();

    // int32
    let b: i32 = 112038;
    println!("{}", b);
    print!("{}", hex_dump_value(&b));
    print!("{}", hex_dump_value(&swap_i32(b)));

    // float
    let bf = b as f32;
    println!("\n{:.6}", bf);
    print!("{}", hex_dump_value(&bf));
    print!("{}", hex_dump_value(&reverse_f32(bf)));

    // int64
    let c: i64 = 1354684321356544;
    println!("\n{}", c);
    print!("{}", hex_dump_value(&c));
    print!("{}", hex_dump_value(&swap_i64(c)));

    // double
    let cf = c as f64;
    println!("\n{:.6}", cf);
    print!("{}", hex_dump_value(&cf));
    print!("{}", hex_dump_value(&reverse_f64(cf)));

    // generic, in place
    let mut edited = cf;
    println!("\n{:.6}", edited);
    print!("{}", hex_dump_value(&edited));
    reverse_in_place(bytemuck::bytes_of_mut(&mut edited));
    print!("{}", hex_dump_value(&edited));
    println!();

    // generic, input kept
    let input = cf;
    let mut output = 0f64;
    print!("{}", hex_dump_value(&input));
    reverse_to_output(bytemuck::bytes_of(&input), bytemuck::bytes_of_mut(&mut output))?;
    print!("{}", hex_dump_value(&output));
    println!();

    info!(
        input = %HexDump(bytemuck::bytes_of(&input)),
        output = %HexDump(bytemuck::bytes_of(&output)),
        "showcase finished"
    );

    Ok(())
}
