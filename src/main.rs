fn main() {
    quest_board::run();
}
