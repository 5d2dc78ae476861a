fn main() {
    uniffi::generate_scaffolding("src/ai_bridge.udl").expect("uniffi scaffolding");
}
