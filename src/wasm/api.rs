//! WASM API for the LR35902 core.
//!
//! Provides JavaScript-callable interfaces for CPU control, state inspection,
//! instruction tracing and disassembly.

use crate::{
    disassemble, format_instruction, DisassemblyOptions, ExecutionError, FlatMemory,
    InstructionObserver, TraceEvent, CPU,
};
use std::fmt;
use tracing::warn;
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(error: ExecutionError) -> Self {
        JsError::new(&error.to_string())
    }
}

/// One disassembled line
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Forwards each executed instruction to a JavaScript function as
/// `(pc, text)`.
struct JsTraceObserver {
    callback: js_sys::Function,
}

impl InstructionObserver for JsTraceObserver {
    fn on_instruction(&mut self, event: &TraceEvent) {
        let result = self.callback.call2(
            &JsValue::NULL,
            &JsValue::from(event.pc),
            &JsValue::from_str(&event.disassembly()),
        );
        report_callback_error(event.pc, result);
    }
}

/// Logs an exception thrown by the JS trace callback. Execution carries on.
fn report_callback_error<T, E: fmt::Debug>(pc: u16, result: Result<T, E>) -> bool {
    match result {
        Ok(_) => false,
        Err(error) => {
            warn!(target: "lr35902::wasm", pc, ?error, "trace callback threw");
            true
        }
    }
}

/// Main core interface for JavaScript
#[wasm_bindgen]
pub struct GameBoyCore {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl GameBoyCore {
    /// Create a core with zeroed memory and an empty program
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        GameBoyCore {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Replace the program image and reset PC to 0
    pub fn load_program(&mut self, program: &[u8]) {
        self.cpu.load_program(program.to_vec());
    }

    /// Execute a single instruction
    pub fn run_instruction(&mut self) -> Result<(), JsError> {
        self.cpu.run_instruction().map_err(JsError::from)
    }

    /// Execute one frame's burst and return the instructions executed
    pub fn run_frame(&mut self) -> Result<u32, JsError> {
        self.cpu.run_frame().map_err(JsError::from)
    }

    /// Leave the halted state
    pub fn resume(&mut self) {
        self.cpu.resume();
    }

    /// Install a `(pc, text) => void` callback invoked after every instruction
    pub fn set_trace_callback(&mut self, callback: js_sys::Function) {
        self.cpu
            .set_observer(Box::new(JsTraceObserver { callback }));
    }

    /// Remove the trace callback
    pub fn clear_trace_callback(&mut self) {
        self.cpu.clear_observer();
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.registers().a
    }

    #[wasm_bindgen(getter)]
    pub fn f(&self) -> u8 {
        self.cpu.registers().f.bits()
    }

    #[wasm_bindgen(getter)]
    pub fn bc(&self) -> u16 {
        self.cpu.registers().bc()
    }

    #[wasm_bindgen(getter)]
    pub fn de(&self) -> u16 {
        self.cpu.registers().de()
    }

    #[wasm_bindgen(getter)]
    pub fn hl(&self) -> u16 {
        self.cpu.registers().hl()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> f64 {
        self.cpu.tick_count() as f64 // Convert u64 to f64 for JavaScript
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    #[wasm_bindgen(getter)]
    pub fn ime(&self) -> bool {
        self.cpu.ime()
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_h(&self) -> bool {
        self.cpu.flag_h()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.read_memory(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.write_memory(addr, value);
    }

    /// Read a 256-byte page from memory (for efficient display)
    pub fn get_memory_page(&self, page: u8) -> Vec<u8> {
        let start = (page as u16) << 8;
        (0..256).map(|i| self.cpu.read_memory(start + i)).collect()
    }

    /// Disassemble the loaded program starting at `start_addr`
    pub fn disassemble(&self, start_addr: u16, num_instructions: u32) -> Vec<JsValue> {
        let program = self.cpu.program().as_bytes();
        let from = (start_addr as usize).min(program.len());

        let opts = DisassemblyOptions {
            start_address: start_addr,
            hex_dump: false,
        };

        disassemble(&program[from..], opts)
            .iter()
            .take(num_instructions as usize)
            .map(|instr| {
                let mut bytes = Vec::with_capacity(3);
                if instr.prefix != 0 {
                    bytes.push(instr.prefix);
                }
                bytes.push(instr.opcode);
                bytes.extend_from_slice(&instr.operand_bytes);

                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes,
                    text: format_instruction(instr),
                })
            })
            .collect()
    }
}

impl Default for GameBoyCore {
    fn default() -> Self {
        Self::new()
    }
}
