use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};

/// Grid of character cells the game draws into. Cells outside the grid are dropped.
pub trait Surface
{
    fn size(&self) -> (i32, i32);
    fn set_cell(&mut self, col: i32, row: i32, glyph: char);
    fn clear(&mut self);
    fn show(&mut self) -> Result<(), String>;
    fn sync(&mut self) -> Result<(), String>;
}

fn cell_count(width: i32, height: i32) -> usize
{
    width.max(0) as usize * height.max(0) as usize
}

struct CellGrid
{
    width: i32,
    height: i32,
    cells: Vec<char>,
}

impl CellGrid
{
    fn new(width: i32, height: i32) -> Self
    {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![' '; cell_count(width, height)],
        }
    }

    fn index(&self, col: i32, row: i32) -> Option<usize>
    {
        if col < 0 || row < 0 || col >= self.width || row >= self.height {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    fn set(&mut self, col: i32, row: i32, glyph: char)
    {
        if let Some(idx) = self.index(col, row) {
            self.cells[idx] = glyph;
        }
    }

    fn clear(&mut self)
    {
        self.cells.fill(' ');
    }

    fn row(&self, row: i32) -> String
    {
        let start = row as usize * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().collect()
    }
}

/// Raw-mode alternate screen. Dropping it restores the terminal.
pub struct TerminalSurface
{
    stdout: Stdout,
    grid: CellGrid,
}

impl TerminalSurface
{
    pub fn enter() -> io::Result<Self>
    {
        let (cols, rows) = terminal::size()?;
        terminal::enable_raw_mode()?;
        // From here on, an early return drops the surface and undoes raw mode.
        let mut surface = Self {
            stdout: io::stdout(),
            grid: CellGrid::new(cols as i32, rows as i32),
        };
        execute!(surface.stdout, EnterAlternateScreen, Hide)?;
        Ok(surface)
    }
}

impl Surface for TerminalSurface
{
    fn size(&self) -> (i32, i32)
    {
        (self.grid.width, self.grid.height)
    }

    fn set_cell(&mut self, col: i32, row: i32, glyph: char)
    {
        self.grid.set(col, row, glyph);
    }

    fn clear(&mut self)
    {
        self.grid.clear();
    }

    fn show(&mut self) -> Result<(), String>
    {
        for row in 0..self.grid.height {
            queue!(self.stdout, MoveTo(0, row as u16), Print(self.grid.row(row)))
                .map_err(|err| err.to_string())?;
        }
        self.stdout.flush().map_err(|err| err.to_string())
    }

    fn sync(&mut self) -> Result<(), String>
    {
        let (cols, rows) = terminal::size().map_err(|err| err.to_string())?;
        self.grid = CellGrid::new(cols as i32, rows as i32);
        queue!(self.stdout, Clear(ClearType::All)).map_err(|err| err.to_string())?;
        Ok(())
    }
}

impl Drop for TerminalSurface
{
    fn drop(&mut self)
    {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
pub struct MemorySurface
{
    grid: CellGrid,
    pub frames_shown: usize,
    pub syncs: usize,
}

#[cfg(test)]
impl MemorySurface
{
    pub fn new(width: i32, height: i32) -> Self
    {
        Self {
            grid: CellGrid::new(width, height),
            frames_shown: 0,
            syncs: 0,
        }
    }

    pub fn cell(&self, col: i32, row: i32) -> Option<char>
    {
        self.grid.index(col, row).map(|idx| self.grid.cells[idx])
    }

    pub fn line(&self, row: i32) -> String
    {
        self.grid.row(row)
    }
}

#[cfg(test)]
impl Surface for MemorySurface
{
    fn size(&self) -> (i32, i32)
    {
        (self.grid.width, self.grid.height)
    }

    fn set_cell(&mut self, col: i32, row: i32, glyph: char)
    {
        self.grid.set(col, row, glyph);
    }

    fn clear(&mut self)
    {
        self.grid.clear();
    }

    fn show(&mut self) -> Result<(), String>
    {
        self.frames_shown += 1;
        Ok(())
    }

    fn sync(&mut self) -> Result<(), String>
    {
        self.syncs += 1;
        Ok(())
    }
}
