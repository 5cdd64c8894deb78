fn main() {
    qu::term::main()
}
