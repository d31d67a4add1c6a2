fn main() {
    klang::term::main()
}
