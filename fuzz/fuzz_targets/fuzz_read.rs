#![no_main]

use libfuzzer_sys::fuzz_target;
use wirebuf::ByteBuffer;

fuzz_target!(|data: &[u8]| {
    // Fuzz the read surface: drive arbitrary bytes through every decoder
    // and check the cursor invariants hold (monotone, never past the end,
    // unmoved by a failed fixed-width read).
    let mut buf = ByteBuffer::from_slice(data);

    for op in data.iter().copied() {
        let before = buf.position();
        let result = match op % 14 {
            0 => buf.read_u8().map(|_| ()),
            1 => buf.read_i16().map(|_| ()),
            2 => buf.read_u16().map(|_| ()),
            3 => buf.read_i32().map(|_| ()),
            4 => buf.read_u32().map(|_| ()),
            5 => buf.read_i64().map(|_| ()),
            6 => buf.read_u64().map(|_| ()),
            7 => buf.read_f32().map(|_| ()),
            8 => buf.read_f64().map(|_| ()),
            9 => buf.read_bool().map(|_| ()),
            10 => buf.read_char().map(|_| ()),
            11 => buf.read_bytes(usize::from(op)).map(|_| ()),
            12 => buf.read_str_exact(usize::from(op)).map(|_| ()),
            _ => {
                // The prefix may be consumed before the body read fails
                let r = buf.read_str().map(|_| ());
                if r.is_err() {
                    assert!(buf.position() == before || buf.position() == before + 2);
                }
                r
            }
        };

        if result.is_err() && op % 14 != 13 {
            assert_eq!(buf.position(), before);
        }
        assert!(buf.position() >= before);
        assert!(buf.position() <= buf.len());

        // Absolute peeks never disturb the cursor
        let probe = buf.position();
        let _ = buf.get(usize::from(op));
        assert_eq!(buf.position(), probe);
    }
});
