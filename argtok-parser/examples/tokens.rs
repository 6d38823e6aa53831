use argtok_parser::lexer::Tokenizer;

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();

    for token in Tokenizer::new(&argv) {
        println!("{:?}\t{:?}", token.kind, token.text);
    }
}
