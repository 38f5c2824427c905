use crate::components::imports::*;
use interfacing::MAX_IMAGES;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum UploadError {
    #[error("최대 {}개까지 업로드 가능합니다", MAX_IMAGES)]
    LimitReached,

    #[error("이미지 업로드에 실패했습니다")]
    Failed,
}

/// Uploaded image URLs, at most [`MAX_IMAGES`]. The first one is the main image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageList {
    urls: Vec<String>,
    pending: usize,
}

impl ImageList {
    pub fn new(urls: Vec<String>) -> Self {
        let mut urls = urls;
        urls.truncate(MAX_IMAGES);
        Self { urls, pending: 0 }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Free slots, counting uploads still in flight.
    pub fn remaining(&self) -> usize {
        MAX_IMAGES.saturating_sub(self.urls.len() + self.pending)
    }

    /// Reserves slots for `requested` new files, returning how many fit.
    pub fn reserve(&mut self, requested: usize) -> Result<usize, UploadError> {
        let accepted = requested.min(self.remaining());
        if requested > 0 && accepted == 0 {
            return Err(UploadError::LimitReached);
        }
        self.pending += accepted;
        Ok(accepted)
    }

    pub fn uploaded(&mut self, url: String) {
        self.pending = self.pending.saturating_sub(1);
        if self.urls.len() < MAX_IMAGES {
            self.urls.push(url);
        }
    }

    pub fn failed(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.urls.len() {
            self.urls.remove(index);
        }
    }
}

/// Image uploader. Owns the list and reports every change upwards.
pub struct ClassImageUpload {
    images: ImageList,
    input_ref: NodeRef,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub initial: Vec<String>,
    pub onchange: Callback<Vec<String>>,
}

pub enum Msg {
    FilesSelected,
    Uploaded(String),
    UploadFailed(GraphQLError),
    Remove(usize),
}

impl Component for ClassImageUpload {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            images: ImageList::new(ctx.props().initial.clone()),
            input_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let list_style = css!(
            "
            display: flex;
            gap: 12px;
            flex-wrap: wrap;

            .thumb {
                position: relative;
                width: 104px;
                height: 104px;
                border-radius: 8px;
                overflow: hidden;
                border: 1px solid #d9d9d9;
            }

            .thumb img {
                width: 100%;
                height: 100%;
                object-fit: cover;
            }

            .thumb .main {
                position: absolute;
                left: 4px;
                top: 4px;
                font-size: 11px;
                padding: 2px 6px;
                border-radius: 4px;
                background-color: #f28316;
                color: #ffffff;
            }

            .thumb button {
                position: absolute;
                right: 4px;
                top: 4px;
                border: none;
                border-radius: 50%;
                width: 20px;
                height: 20px;
                cursor: pointer;
            }

            label.add {
                display: flex;
                align-items: center;
                justify-content: center;
                width: 104px;
                height: 104px;
                border: 1px dashed #d9d9d9;
                border-radius: 8px;
                cursor: pointer;
                color: #999999;
            }

            input[type=file] {
                display: none;
            }
        "
        );

        let thumbs = self.images.urls().iter().enumerate().map(|(index, url)| {
            let onclick = ctx.link().callback(move |_: MouseEvent| Msg::Remove(index));
            html! {
                <div class="thumb" key={url.clone()}>
                    <img src={url.clone()} alt="class"/>
                    if index == 0 {
                        <span class="main">{ "대표" }</span>
                    }
                    <button type="button" {onclick}>{ "×" }</button>
                </div>
            }
        });

        let onchange = ctx.link().callback(|_: Event| Msg::FilesSelected);

        html! {
            <div class={list_style}>
                { for thumbs }
                if self.images.remaining() > 0 {
                    <label class="add">
                        { "+ Upload" }
                        <input ref={self.input_ref.clone()} type="file" accept="image/*" multiple={true} {onchange}/>
                    </label>
                }
            </div>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FilesSelected => {
                let Some(input) = self.input_ref.cast::<HtmlInputElement>() else {
                    return false;
                };
                let files: Vec<web_sys::File> = input
                    .files()
                    .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                    .unwrap_or_default();
                input.set_value("");

                let accepted = match self.images.reserve(files.len()) {
                    Ok(accepted) => accepted,
                    Err(e) => {
                        alert(&e.to_string());
                        return false;
                    }
                };
                if accepted < files.len() {
                    alert(&UploadError::LimitReached.to_string());
                }

                let client = GraphQLClient::new(&conf_of(ctx).graphql);
                for file in files.into_iter().take(accepted) {
                    let client = client.clone();
                    ctx.link().send_future(async move {
                        match client.upload_file(&file).await {
                            Ok(url) => Msg::Uploaded(url),
                            Err(e) => Msg::UploadFailed(e),
                        }
                    });
                }
                true
            }
            Msg::Uploaded(url) => {
                console::log!(format!("image uploaded: {}", url));
                self.images.uploaded(url);
                self.notify(ctx);
                true
            }
            Msg::UploadFailed(e) => {
                console::error!(format!("image upload failed: {}", e));
                self.images.failed();
                alert(&UploadError::Failed.to_string());
                true
            }
            Msg::Remove(index) => {
                self.images.remove(index);
                self.notify(ctx);
                true
            }
        }
    }
}

impl ClassImageUpload {
    fn notify(&self, ctx: &Context<Self>) {
        ctx.props().onchange.emit(self.images.urls().to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://cdn/{}.png", i)).collect()
    }

    #[test]
    fn initial_list_is_capped() {
        assert_eq!(ImageList::new(urls(7)).urls().len(), MAX_IMAGES);
    }

    #[test]
    fn reserve_accepts_only_free_slots() {
        let mut images = ImageList::new(urls(3));
        assert_eq!(images.reserve(4), Ok(2));
        assert_eq!(images.remaining(), 0);
        assert_eq!(images.reserve(1), Err(UploadError::LimitReached));
    }

    #[test]
    fn failed_upload_frees_its_slot() {
        let mut images = ImageList::new(urls(4));
        assert_eq!(images.reserve(1), Ok(1));
        images.failed();
        assert_eq!(images.remaining(), 1);
    }

    #[test]
    fn uploads_and_removals_keep_order() {
        let mut images = ImageList::default();
        images.reserve(2).unwrap();
        images.uploaded("a".into());
        images.uploaded("b".into());
        images.remove(0);
        assert_eq!(images.urls().to_vec(), vec!["b".to_owned()]);
        images.remove(9);
        assert_eq!(images.urls().len(), 1);
    }

    #[test]
    fn limit_message_names_the_limit() {
        assert_eq!(
            UploadError::LimitReached.to_string(),
            "최대 5개까지 업로드 가능합니다"
        );
    }
}
