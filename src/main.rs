fn main() -> Result<(), Box<dyn std::error::Error>> {
    algoforge::cli::main()
}
