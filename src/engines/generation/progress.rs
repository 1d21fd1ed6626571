use super::evolution_engine::ProgressCallback;

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        println!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, mean_fitness: f64, best_fitness: f64) {
        println!(
            "Generation {} complete. Mean fitness: {:.4}, best fitness: {:.4}",
            generation + 1,
            mean_fitness,
            best_fitness
        );
    }
}

// For host processes observing the run from another thread.
pub struct ChannelProgressCallback {
    sender: std::sync::mpsc::Sender<ProgressMessage>,
}

pub enum ProgressMessage {
    GenerationStart(usize),
    GenerationComplete {
        generation: usize,
        mean_fitness: f64,
        best_fitness: f64,
    },
}

impl ChannelProgressCallback {
    pub fn new(sender: std::sync::mpsc::Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        let _ = self.sender.send(ProgressMessage::GenerationStart(generation));
    }

    fn on_generation_complete(&mut self, generation: usize, mean_fitness: f64, best_fitness: f64) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete {
            generation,
            mean_fitness,
            best_fitness,
        });
    }
}
