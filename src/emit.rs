const PER_LINE: usize = 16;

/// C header declaring `data` as `<symbol>` and its length as `<symbol>_len`.
pub fn c_header(data: &[u8], symbol: &str, program: &str) -> String {
    let mut s = String::new();
    s.push_str("// Auto-generated launcher program\n");
    s.push_str(&format!("// Program name: {}\n\n", program));
    s.push_str(&format!("unsigned int {}_len = {};\n", symbol, data.len()));
    s.push_str(&format!("unsigned char {}[] = {{\n", symbol));
    for chunk in data.chunks(PER_LINE) {
        let row: Vec<String> = chunk.iter().map(|b| format!("0x{:02X}", b)).collect();
        s.push_str(&format!("    {},\n", row.join(", ")));
    }
    s.push_str("};\n");
    s
}
