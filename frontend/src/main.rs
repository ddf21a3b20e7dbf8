fn main() {
    clinica_frontend::start();
}
