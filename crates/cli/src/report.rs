//! Registry statistics for console and JSON output.

use planar::{description, Figure, Mathematics, Representations, ResultHandler};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Serialize)]
pub struct FigureRow {
    pub index: usize,
    pub kind: String,
    pub name: Option<String>,
    pub points: usize,
    pub perimeter: f64,
    pub area: f64,
    pub description: String,
}

/// Extremal figures are reported by registry index.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub figures: Vec<FigureRow>,
    pub total_area: f64,
    pub max_area: Option<usize>,
    pub min_area: Option<usize>,
    pub max_perimeter: Option<usize>,
    pub min_perimeter: Option<usize>,
    pub representations: Representations,
}

fn index_of(m: &Mathematics, f: Option<&Figure>) -> Option<usize> {
    let f = f?;
    m.iter().position(|g| std::ptr::eq(g, f))
}

impl Summary {
    /// Synchronous metrics plus one background representations pass, waited
    /// on before returning.
    pub fn collect(m: &mut Mathematics) -> Self {
        let slot: Rc<RefCell<Option<Representations>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&slot);
        let handler: ResultHandler = Box::new(move |r: &Representations| {
            *sink.borrow_mut() = Some(r.clone());
        });
        m.find_figure_representations(Some(handler));
        m.wait_all();
        let representations = slot.borrow_mut().take().unwrap_or_default();

        let figures = m
            .iter()
            .enumerate()
            .map(|(index, f)| FigureRow {
                index,
                kind: f.kind().to_string(),
                name: f.name().map(str::to_string),
                points: f.point_count(),
                perimeter: f.perimeter(),
                area: f.area(),
                description: description(f),
            })
            .collect();
        Self {
            figures,
            total_area: m.total_area_all(),
            max_area: index_of(m, m.max_area_figure()),
            min_area: index_of(m, m.min_area_figure()),
            max_perimeter: index_of(m, m.max_perimeter_figure()),
            min_perimeter: index_of(m, m.min_perimeter_figure()),
            representations,
        }
    }

    pub fn print(&self) {
        for row in &self.figures {
            println!("[{}] {}", row.index, row.description);
        }
        println!("total area: {}", self.total_area);
        let show = |label: &str, idx: Option<usize>| match idx {
            Some(i) => println!("{label}: [{i}] {}", self.figures[i].description),
            None => println!("{label}: none"),
        };
        show("max area", self.max_area);
        show("min area", self.min_area);
        show("max perimeter", self.max_perimeter);
        show("min perimeter", self.min_perimeter);
        let r = &self.representations;
        println!("longest: {}", r.longest);
        println!("shortest: {}", r.shortest);
        println!("largest: {}", r.largest);
        println!("smallest: {}", r.smallest);
    }
}
