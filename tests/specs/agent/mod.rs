mod create;
mod dispose;
mod hooks;
mod resume;
mod storage;
mod workflow;
