/// Count of simulation steps since the phantom server started
pub type Tick = u32;
