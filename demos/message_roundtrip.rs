//! Example: Building and Parsing a Game Message
//!
//! This example assembles a spawn-style message on the write side, hands
//! the bytes off as a transport frame, and parses it back on the read side
//! gated by the frame readiness signal.
//!
//! Run with: `cargo run --example message_roundtrip`

use wirebuf::{ByteBuffer, FrameState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Game Message Roundtrip Demo ===\n");

    // 1. Assemble the outbound message
    println!("1. WRITE SIDE");
    let mut msg = ByteBuffer::new();
    msg.write_u16(0x0205); // opcode: entity spawn
    msg.write_i32(48_713); // entity id
    msg.write_str("Nova-7")?; // display name
    msg.write_f64(1024.5); // x
    msg.write_f64(-300.25); // y
    msg.write_bool(true); // hostile flag

    println!("   - Encoded size: {} bytes", msg.len());
    println!("   - Hex: {:02X?}", msg.as_slice());

    // 2. Hand off to transport as a frozen frame
    let wire = msg.into_bytes();
    println!("\n2. TRANSPORT HAND-OFF");
    println!("   - Frame of {} bytes ready to send", wire.len());

    // 3. Receive side: the framer declares the size, then dispatch parses
    println!("\n3. READ SIDE");
    let mut frame = FrameState::new();
    frame.set_length(wire.len());
    println!(
        "   - Frame declared: {} bytes | ready: {}",
        frame.declared_len(),
        frame.is_ready()
    );

    if frame.is_ready() {
        let mut parse = ByteBuffer::from_slice(&wire);
        let opcode = parse.read_u16()?;
        let entity = parse.read_i32()?;
        let name = parse.read_str()?;
        let x = parse.read_f64()?;
        let y = parse.read_f64()?;
        let hostile = parse.read_bool()?;

        println!("   - opcode:  0x{opcode:04X}");
        println!("   - entity:  {entity}");
        println!("   - name:    {name:?}");
        println!("   - pos:     ({x}, {y})");
        println!("   - hostile: {hostile}");
        println!("   - bytes left: {}", parse.remaining());

        frame.reset();
        println!("   - frame reset, ready: {}", frame.is_ready());
    }

    // 4. Absolute peeks for inspection without consuming
    println!("\n4. INDEXED INSPECTION");
    let probe = ByteBuffer::from_slice(&wire);
    println!(
        "   - First opcode byte at [0]: 0x{:02X} (cursor stays at {})",
        probe[0],
        probe.position()
    );

    // 5. Truncated input fails with structured diagnostics
    println!("\n5. TRUNCATED INPUT");
    let mut short = ByteBuffer::from_slice(&wire[..3]);
    short.read_u16()?;
    match short.read_i32() {
        Err(e) => println!("   - Parse aborted: {e}"),
        Ok(v) => println!("   - Unexpected value: {v}"),
    }

    Ok(())
}
