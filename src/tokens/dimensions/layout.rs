//! Layout archetypes: page shell and content regions

use crate::tokens::archetype::LayoutKey;

axis_record! {
    /// Structural fragments for the page shell
    LayoutRecord {
        /// Outermost page container
        shell,
        /// Navigation region (sidebar, top bar, rail)
        nav,
        /// Main region beside or below the navigation
        main,
        /// Width-constrained content column inside `main`
        content,
        /// Default grid for card and stat collections
        grid,
        section,
    }
}

pub(super) fn record(key: LayoutKey) -> LayoutRecord {
    match key {
        LayoutKey::SidebarMain => LayoutRecord {
            shell: "min-h-screen flex",
            nav: "w-64 shrink-0 flex flex-col border-r",
            main: "flex-1 min-w-0 flex flex-col",
            content: "mx-auto w-full max-w-7xl",
            grid: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3",
            section: "flex flex-col",
        },
        LayoutKey::TopNav => LayoutRecord {
            shell: "min-h-screen flex flex-col",
            nav: "sticky top-0 z-10 flex items-center justify-between border-b",
            main: "flex-1 flex flex-col",
            content: "mx-auto w-full max-w-6xl",
            grid: "grid grid-cols-1 md:grid-cols-3",
            section: "flex flex-col",
        },
        LayoutKey::Bento => LayoutRecord {
            shell: "min-h-screen flex flex-col",
            nav: "flex items-center justify-between",
            main: "flex-1",
            content: "mx-auto w-full max-w-7xl",
            grid: "grid grid-cols-2 md:grid-cols-4 auto-rows-[minmax(8rem,auto)] [&>*:first-child]:col-span-2 [&>*:first-child]:row-span-2",
            section: "flex flex-col",
        },
        LayoutKey::SingleColumn => LayoutRecord {
            shell: "min-h-screen flex flex-col items-center",
            nav: "w-full max-w-3xl flex items-center justify-between",
            main: "w-full max-w-3xl flex flex-col",
            content: "w-full",
            grid: "grid grid-cols-1",
            section: "flex flex-col",
        },
        LayoutKey::SplitHero => LayoutRecord {
            shell: "min-h-screen grid lg:grid-cols-2",
            nav: "lg:col-span-2 flex items-center justify-between",
            main: "lg:col-span-2 flex flex-col",
            content: "mx-auto w-full max-w-7xl",
            grid: "grid grid-cols-1 lg:grid-cols-2 items-center",
            section: "flex flex-col justify-center",
        },
        LayoutKey::CommandCenter => LayoutRecord {
            shell: "h-screen flex overflow-hidden",
            nav: "w-14 shrink-0 flex flex-col items-center border-r",
            main: "flex-1 overflow-y-auto flex flex-col",
            content: "w-full",
            grid: "grid grid-cols-2 lg:grid-cols-4 xl:grid-cols-6",
            section: "flex flex-col",
        },
    }
}
