use argtok_parser::utils::split_eq;

fn main() {
    for arg in std::env::args().skip(1) {
        match split_eq(&arg) {
            (name, Some(value)) => println!("{name} = {value}"),
            (name, None) => println!("{name}"),
        }
    }
}
